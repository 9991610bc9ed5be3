//! 계정 및 협업 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 설정은 시작 시 한 번 읽어 불변 `AppConfig`로 고정하고, 모든 의존성은
//! 생성자 주입 후 `web::Data`로 핸들러에 전달합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use account_collab_backend::config::AppConfig;
use account_collab_backend::db::Database;
use account_collab_backend::repositories::collab::{
    ChatRepository, DashboardRepository, TransactionalGroupRepository,
};
use account_collab_backend::repositories::tokens::TokenBlacklistRepository;
use account_collab_backend::repositories::users::UserRepository;
use account_collab_backend::repositories::verification::VerificationCodeRepository;
use account_collab_backend::routes::configure_all_routes;
use account_collab_backend::services::auth::{
    AuthService, GoogleAuthService, TokenService, VerificationService,
};
use account_collab_backend::services::notifications::EmailService;
use account_collab_backend::services::users::UserService;

/// 핸들러에 등록되는 공유 의존성 묶음
struct AppServices {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
    verification_service: Arc<VerificationService>,
    auth_service: Arc<AuthService>,
    dashboard_repo: Arc<DashboardRepository>,
    group_repo: Arc<TransactionalGroupRepository>,
    chat_repo: Arc<ChatRepository>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 계정/협업 백엔드 시작중...");

    // 설정은 기동 시 한 번만 읽는다
    let config = Arc::new(AppConfig::from_env());

    // 데이터베이스 연결
    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(
        Database::new(&config.server)
            .await
            .expect("데이터베이스 연결 실패"),
    );
    info!("✅ MongoDB 연결 성공");

    // 의존성 그래프 구성
    let services = build_services(config.clone(), database.clone());

    // 인덱스 생성 (이메일 유일성, 블랙리스트 TTL 등)
    create_indexes(&database).await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(config, services).await
}

/// 저장소와 서비스를 생성자 주입으로 연결합니다
fn build_services(config: Arc<AppConfig>, database: Arc<Database>) -> AppServices {
    let user_repo = Arc::new(UserRepository::new(database.clone()));
    let verification_repo = Arc::new(VerificationCodeRepository::new(database.clone()));
    let blacklist_repo = Arc::new(TokenBlacklistRepository::new(database.clone()));
    let dashboard_repo = Arc::new(DashboardRepository::new(database.clone()));
    let group_repo = Arc::new(TransactionalGroupRepository::new(database.clone()));
    let chat_repo = Arc::new(ChatRepository::new(database.clone()));

    let email_service = Arc::new(EmailService::new(&config.smtp));
    let user_service = Arc::new(UserService::new(config.clone(), user_repo));
    let token_service = Arc::new(TokenService::new(config.clone(), blacklist_repo));
    let verification_service = Arc::new(VerificationService::new(
        config.clone(),
        verification_repo,
        email_service,
    ));
    let google_auth_service = Arc::new(GoogleAuthService::new(config.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_service.clone(),
        token_service.clone(),
        verification_service.clone(),
        google_auth_service,
    ));

    AppServices {
        user_service,
        token_service,
        verification_service,
        auth_service,
        dashboard_repo,
        group_repo,
        chat_repo,
    }
}

/// 컬렉션 인덱스를 생성합니다
///
/// 인덱스 생성 실패는 치명적이지 않으므로 경고만 남기고 계속 진행합니다.
async fn create_indexes(database: &Arc<Database>) {
    let user_repo = UserRepository::new(database.clone());
    if let Err(e) = user_repo.create_indexes().await {
        error!("users 인덱스 생성 실패: {}", e);
    }

    let verification_repo = VerificationCodeRepository::new(database.clone());
    if let Err(e) = verification_repo.create_indexes().await {
        error!("verification_codes 인덱스 생성 실패: {}", e);
    }

    let blacklist_repo = TokenBlacklistRepository::new(database.clone());
    if let Err(e) = blacklist_repo.create_indexes().await {
        error!("token_blacklist 인덱스 생성 실패: {}", e);
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
async fn start_http_server(config: Arc<AppConfig>, services: AppServices) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.server.rate_limit_per_second)
        .burst_size(config.server.rate_limit_burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 오류");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.server.rate_limit_per_second, config.server.rate_limit_burst_size
    );

    let user_service = web::Data::from(services.user_service);
    let token_service = web::Data::from(services.token_service);
    let verification_service = web::Data::from(services.verification_service);
    let auth_service = web::Data::from(services.auth_service);
    let dashboard_repo = web::Data::from(services.dashboard_repo);
    let group_repo = web::Data::from(services.group_repo);
    let chat_repo = web::Data::from(services.chat_repo);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 공유 의존성 등록
            .app_data(user_service.clone())
            .app_data(token_service.clone())
            .app_data(verification_service.clone())
            .app_data(auth_service.clone())
            .app_data(dashboard_repo.clone())
            .app_data(group_repo.clone())
            .app_data(chat_repo.clone())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// RUST_LOG 환경변수로 레벨을 제어합니다 (기본값: "info,actix_web=debug").
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

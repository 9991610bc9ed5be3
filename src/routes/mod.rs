//! # 라우트 구성
//!
//! 모든 API 엔드포인트를 스코프별로 등록합니다.
//!
//! | 스코프 | 내용 |
//! |---|---|
//! | `/health` | 서비스 상태 확인 |
//! | `/api/v1/auth` | 회원가입/로그인/코드/갱신/로그아웃/Google |
//! | `/api/v1/me` | 내 프로필 |
//! | `/api/v1/users` | 계정 삭제 |
//! | `/api/v1/dashboard` | 대시보드 생성/목록 |
//! | `/api/v1/transactional-group` | 거래 그룹 생성/목록 |
//! | `/api/v1/chat` | 채팅 생성/조회 |

use actix_web::{HttpResponse, web};

use crate::handlers;

/// 전체 라우트 등록
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));

    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .service(handlers::auth::signup)
                    .service(handlers::auth::login)
                    .service(handlers::auth::request_code)
                    .service(handlers::auth::refresh)
                    .service(handlers::auth::logout)
                    .service(handlers::auth::google_login),
            )
            .service(web::scope("/me").service(handlers::users::me))
            .service(web::scope("/users").service(handlers::users::delete_user))
            .service(
                web::scope("/dashboard")
                    .service(handlers::dashboards::create_dashboard)
                    .service(handlers::dashboards::my_dashboards),
            )
            .service(
                web::scope("/transactional-group")
                    .service(handlers::transactional_groups::create_group)
                    .service(handlers::transactional_groups::my_groups),
            )
            .service(
                web::scope("/chat")
                    .service(handlers::chats::create_chat)
                    .service(handlers::chats::chat_by_group),
            ),
    );
}

/// 상태 확인 엔드포인트
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

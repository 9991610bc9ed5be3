//! 인증 API 핸들러
//!
//! 회원가입, 로그인, 인증 코드 발송, 토큰 갱신, 로그아웃, Google 로그인
//! 엔드포인트를 제공합니다. 모든 흐름 로직은 `AuthService`에 위임하고
//! 이 계층은 요청 검증과 응답 구성만 담당합니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::dto::auth::{
    GoogleLoginRequest, LoginRequest, LogoutRequest, RefreshTokenRequest, RequestCodeRequest,
    RequestCodeResponse, SignupRequest,
};
use crate::domain::dto::users::SignupResponse;
use crate::errors::AppError;
use crate::services::auth::{AuthService, VerificationService};

/// 회원가입
///
/// 이메일 인증 코드가 유효해야 계정이 생성됩니다. 검증에 성공한 코드는
/// 계정 생성 성공 여부와 무관하게 소모됩니다.
#[post("/signup")]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = auth_service
        .signup(
            &payload.email,
            &payload.password,
            &payload.code,
            &payload.first_name,
            &payload.last_name,
        )
        .await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        id: user.id_string().unwrap_or_default(),
        email: user.email,
        joined_on: user.joined_on.to_chrono(),
    }))
}

/// 이메일 + 비밀번호 로그인
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_pair = auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

/// 이메일 인증 코드 발송
#[post("/request-code")]
pub async fn request_code(
    verification_service: web::Data<VerificationService>,
    payload: web::Json<RequestCodeRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    verification_service.request_code(&payload.email).await?;

    Ok(HttpResponse::Ok().json(RequestCodeResponse {
        message: "Verification code sent".to_string(),
    }))
}

/// 리프레시 토큰으로 토큰 쌍 갱신
#[post("/refresh")]
pub async fn refresh(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let token_pair = auth_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

/// 로그아웃 (리프레시 토큰 무효화, 멱등)
#[post("/logout")]
pub async fn logout(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    auth_service.logout(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Logged out"
    })))
}

/// Google ID 토큰 연합 로그인
#[post("/google-login")]
pub async fn google_login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token_pair = auth_service.federated_login(&payload.token).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

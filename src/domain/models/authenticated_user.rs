//! 인증된 요청 주체 모델
//!
//! `Authorization: Bearer {access_token}` 헤더를 검증하고 저장소에서
//! 사용자를 다시 조회하는 actix-web 추출기입니다. 핸들러 시그니처에
//! `AuthenticatedUser`를 선언하는 것만으로 보호된 엔드포인트가 됩니다.
//!
//! 토큰 만료, 서명 오류, 삭제된 사용자 등 모든 실패는 단일한
//! `AuthenticationFailed`로 수렴합니다 (원인 비노출 정책).

use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;

use crate::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::user_service::UserService;

/// 요청에서 복원된 인증 사용자
///
/// 채팅 참가자 스냅샷 구성에 필요한 프로필 필드까지 포함합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token_service = req
                .app_data::<web::Data<TokenService>>()
                .ok_or_else(|| {
                    AppError::InternalError("TokenService is not registered".to_string())
                })?
                .clone();
            let user_service = req
                .app_data::<web::Data<UserService>>()
                .ok_or_else(|| {
                    AppError::InternalError("UserService is not registered".to_string())
                })?
                .clone();

            // Authorization 헤더에서 토큰 추출
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or(AppError::AuthenticationFailed)?;

            let token = token_service.extract_bearer_token(auth_header)?;
            let claims = token_service.verify_access_token(token)?;

            // 토큰이 유효해도 삭제된 계정이면 거부
            let user = user_service
                .find_by_email(&claims.sub)
                .await
                .map_err(|_| AppError::AuthenticationFailed)?
                .ok_or(AppError::AuthenticationFailed)?;

            Ok(AuthenticatedUser {
                user_id: user.id_string().unwrap_or_default(),
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            })
        })
    }
}

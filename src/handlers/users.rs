//! 사용자 API 핸들러
//!
//! 내 프로필 조회와 계정 삭제 엔드포인트를 제공합니다.

use actix_web::{HttpResponse, delete, get, web};

use crate::domain::dto::users::UserResponse;
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 내 프로필 조회
#[get("")]
pub async fn me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 추출기에서 이미 존재가 확인된 계정이라도 전체 문서를 다시 읽는다
    let full_user = user_service
        .find_by_email(&user.email)
        .await?
        .ok_or(AppError::AuthenticationFailed)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(full_user)))
}

/// 계정 삭제 (본인만 가능)
#[delete("/{email}")]
pub async fn delete_user(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let target_email = path.into_inner();

    user_service.delete_user(&target_email, &user).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "User deleted"
    })))
}

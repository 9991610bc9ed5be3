//! 사용자 관련 응답 DTO

use serde::Serialize;

use crate::domain::entities::users::User;

/// 사용자 프로필 응답
///
/// 비밀번호 해시는 절대 응답에 포함되지 않습니다.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub joined_on: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            joined_on: user.joined_on.to_chrono(),
        }
    }
}

/// 회원가입 성공 응답
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
    pub joined_on: chrono::DateTime<chrono::Utc>,
}

//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(이메일/비밀번호)과 Google 연동 계정을 모두 지원하는
//! 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일은 항상 소문자로 정규화되어 저장되며 유니크 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (소문자 정규화, unique)
    pub email: String,
    /// 해시된 비밀번호 (Google 전용 계정의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_password: Option<String>,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 가입 시각
    pub joined_on: DateTime,
}

impl User {
    /// 로컬 인증 사용자 생성
    pub fn new_local(
        email: String,
        hashed_password: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id: None,
            email,
            hashed_password: Some(hashed_password),
            first_name,
            last_name,
            joined_on: DateTime::now(),
        }
    }

    /// Google 연동 사용자 생성 (비밀번호 해시 없음)
    pub fn new_federated(email: String, first_name: String, last_name: String) -> Self {
        Self {
            id: None,
            email,
            hashed_password: None,
            first_name,
            last_name,
            joined_on: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 계정인지 확인
    ///
    /// Google 전용 계정은 해시가 없으므로 비밀번호 인증이 불가능합니다.
    pub fn can_authenticate_with_password(&self) -> bool {
        self.hashed_password
            .as_ref()
            .map(|h| !h.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_user_can_authenticate_with_password() {
        let user = User::new_local(
            "a@x.com".to_string(),
            "$2b$04$hash".to_string(),
            "First".to_string(),
            "Last".to_string(),
        );
        assert!(user.can_authenticate_with_password());
    }

    #[test]
    fn test_federated_user_cannot_authenticate_with_password() {
        let user = User::new_federated(
            "a@x.com".to_string(),
            "First".to_string(),
            "Last".to_string(),
        );
        assert!(!user.can_authenticate_with_password());
        assert!(user.hashed_password.is_none());
    }
}

//! 무효화된 리프레시 토큰 엔티티
//!
//! 로그아웃 시 토큰 문자열 그대로를 블랙리스트 컬렉션에 기록합니다.
//! `expires_at`에 Mongo TTL 인덱스가 걸려 있어 토큰 자체의 만료 시점이
//! 지나면 저장소에서 자동으로 정리됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 블랙리스트 엔트리
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedToken {
    /// 리프레시 토큰 문자열 (unique)
    pub token: String,
    /// 무효화 시각
    pub revoked_at: DateTime,
    /// 토큰 자체의 만료 시각 (TTL 인덱스 기준 필드)
    pub expires_at: DateTime,
}

impl RevokedToken {
    pub fn new(token: String, expires_at: DateTime) -> Self {
        Self {
            token,
            revoked_at: DateTime::now(),
            expires_at,
        }
    }
}

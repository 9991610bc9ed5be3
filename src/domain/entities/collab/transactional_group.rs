//! 거래 그룹 엔티티
//!
//! 그룹 생성 시 채팅이 함께 생성되어 `chat_id`로 연결됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 거래 그룹 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionalGroup {
    pub transactional_group_id: String,
    /// 소유자 사용자 ID
    pub owner_id: String,
    pub title: String,
    /// 공유 대상 사용자 ID 목록
    pub shared_with: Vec<String>,
    pub created_on: DateTime,
    pub is_active: bool,
    pub description: String,
    /// 그룹 전용 채팅 ID
    pub chat_id: String,
    pub color: String,
}

impl TransactionalGroup {
    pub fn new(
        owner_id: String,
        title: String,
        description: String,
        color: String,
        chat_id: String,
    ) -> Self {
        Self {
            transactional_group_id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            title,
            shared_with: Vec::new(),
            created_on: DateTime::now(),
            is_active: true,
            description,
            chat_id,
            color,
        }
    }
}

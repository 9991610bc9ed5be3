//! 대시보드 엔티티
//!
//! 소유자/공유 대상만 기록하는 단순 자원 문서입니다.
//! 내부에 별도의 비즈니스 로직은 없습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 대시보드 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub dashboard_id: String,
    /// 소유자 사용자 ID
    pub owner_id: String,
    pub title: String,
    /// 공유 대상 사용자 ID 목록
    pub shared_with: Vec<String>,
    pub bank_accounts: Vec<serde_json::Value>,
    pub credit_cards: Vec<serde_json::Value>,
    pub defaults: serde_json::Value,
    pub created_on: DateTime,
    pub description: String,
    pub theme_color: String,
}

impl Dashboard {
    pub fn new(owner_id: String, title: String, description: String, theme_color: String) -> Self {
        Self {
            dashboard_id: uuid::Uuid::new_v4().to_string(),
            owner_id,
            title,
            shared_with: Vec::new(),
            bank_accounts: Vec::new(),
            credit_cards: Vec::new(),
            defaults: serde_json::json!({}),
            created_on: DateTime::now(),
            description,
            theme_color,
        }
    }
}

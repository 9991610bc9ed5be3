//! 협업 자원(대시보드/거래 그룹/채팅) 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::collab::{ChatParticipant, TransactionalGroup};

/// 대시보드 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct DashboardCreateRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: String,
    pub theme_color: String,
}

/// 거래 그룹 생성 요청
#[derive(Debug, Deserialize, Validate)]
pub struct TransactionalGroupCreateRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: String,
    pub color: String,
}

/// 채팅 생성 요청
#[derive(Debug, Deserialize)]
pub struct ChatCreateRequest {
    pub participants: Vec<ChatParticipant>,
}

/// 소유/공유 거래 그룹 목록 응답
#[derive(Debug, Serialize)]
pub struct MyGroupsResponse {
    pub owned: Vec<TransactionalGroup>,
    pub shared_access: Vec<TransactionalGroup>,
}

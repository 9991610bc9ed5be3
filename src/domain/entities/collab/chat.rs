//! 채팅 엔티티
//!
//! 참가자 스냅샷과 메시지 목록을 가진 문서입니다.
//! 거래 그룹과 1:1로 연결될 수 있습니다 (`transactional_group_id`).

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 채팅 참가자 스냅샷
///
/// 생성 시점의 사용자 프로필을 복사해 둡니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatParticipant {
    pub user_id: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
}

/// 채팅 메시지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: String,
    /// 발신자 스냅샷 (id, first_name, last_name, email)
    pub sender: ChatParticipant,
    pub seen_by: Vec<String>,
    pub text: String,
    pub message_type: String,
    pub time_stamp: DateTime,
}

/// 채팅 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub chat_id: String,
    /// 연결된 거래 그룹 ID (그룹 생성 직후 역방향으로 채워짐)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactional_group_id: Option<String>,
    pub participants: Vec<ChatParticipant>,
    pub messages: Vec<ChatMessage>,
}

impl Chat {
    pub fn new(participants: Vec<ChatParticipant>) -> Self {
        Self {
            chat_id: uuid::Uuid::new_v4().to_string(),
            transactional_group_id: None,
            participants,
            messages: Vec::new(),
        }
    }
}

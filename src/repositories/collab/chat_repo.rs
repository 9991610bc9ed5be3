//! 채팅 리포지토리

use std::sync::Arc;

use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::collab::Chat;
use crate::errors::AppError;

const COLLECTION_NAME: &str = "chats";

/// 채팅 데이터 액세스 리포지토리
pub struct ChatRepository {
    db: Arc<Database>,
}

impl ChatRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Chat> {
        self.db.collection::<Chat>(COLLECTION_NAME)
    }

    pub async fn insert(&self, chat: &Chat) -> Result<(), AppError> {
        self.collection()
            .insert_one(chat)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// 그룹 생성 후 채팅에 그룹 ID를 역방향으로 연결합니다.
    pub async fn link_group(&self, chat_id: &str, group_id: &str) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "chat_id": chat_id },
                doc! { "$set": { "transactional_group_id": group_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// 거래 그룹 ID로 채팅을 조회합니다.
    pub async fn find_by_group(&self, group_id: &str) -> Result<Option<Chat>, AppError> {
        self.collection()
            .find_one(doc! { "transactional_group_id": group_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

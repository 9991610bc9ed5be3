//! 거래 그룹 리포지토리

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::collab::TransactionalGroup;
use crate::errors::AppError;

const COLLECTION_NAME: &str = "transactional_groups";

/// 거래 그룹 데이터 액세스 리포지토리
pub struct TransactionalGroupRepository {
    db: Arc<Database>,
}

impl TransactionalGroupRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<TransactionalGroup> {
        self.db.collection::<TransactionalGroup>(COLLECTION_NAME)
    }

    pub async fn insert(&self, group: &TransactionalGroup) -> Result<(), AppError> {
        self.collection()
            .insert_one(group)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// 소유한 그룹 목록
    pub async fn find_owned(&self, user_id: &str) -> Result<Vec<TransactionalGroup>, AppError> {
        let cursor = self
            .collection()
            .find(doc! { "owner_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 공유받은 그룹 목록
    pub async fn find_shared(&self, user_id: &str) -> Result<Vec<TransactionalGroup>, AppError> {
        let cursor = self
            .collection()
            .find(doc! { "shared_with": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

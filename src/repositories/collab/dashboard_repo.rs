//! 대시보드 리포지토리

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::collab::Dashboard;
use crate::errors::AppError;

const COLLECTION_NAME: &str = "dashboards";

/// 대시보드 데이터 액세스 리포지토리
pub struct DashboardRepository {
    db: Arc<Database>,
}

impl DashboardRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Dashboard> {
        self.db.collection::<Dashboard>(COLLECTION_NAME)
    }

    pub async fn insert(&self, dashboard: &Dashboard) -> Result<(), AppError> {
        self.collection()
            .insert_one(dashboard)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// 소유하거나 공유받은 대시보드 목록을 조회합니다.
    pub async fn find_for_user(&self, user_id: &str) -> Result<Vec<Dashboard>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {
                "$or": [
                    { "owner_id": user_id },
                    { "shared_with": user_id },
                ]
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

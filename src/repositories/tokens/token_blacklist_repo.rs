//! # 토큰 블랙리스트 리포지토리 구현
//!
//! 로그아웃으로 무효화된 리프레시 토큰의 멤버십 저장소입니다.
//! 토큰 문자열에 유니크 인덱스가 있어 중복 삽입(재로그아웃)은
//! 에러가 아닌 멱등 성공으로 처리됩니다.
//!
//! `expires_at` 필드에 TTL 인덱스를 걸어 토큰 자체가 만료되는 시점에
//! 엔트리를 자동 정리합니다. 만료된 토큰은 서명 검증 단계에서 어차피
//! 거부되므로 블랙리스트에 남아 있을 필요가 없습니다.

use std::sync::Arc;

use mongodb::{IndexModel, bson::doc, options::IndexOptions};

use crate::db::Database;
use crate::domain::entities::tokens::RevokedToken;
use crate::errors::AppError;
use crate::repositories::is_duplicate_key_error;

const COLLECTION_NAME: &str = "token_blacklist";

/// 무효화된 리프레시 토큰 리포지토리
pub struct TokenBlacklistRepository {
    db: Arc<Database>,
}

impl TokenBlacklistRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<RevokedToken> {
        self.db.collection::<RevokedToken>(COLLECTION_NAME)
    }

    /// 토큰을 블랙리스트에 추가합니다 (멱등).
    pub async fn insert(&self, revoked: RevokedToken) -> Result<(), AppError> {
        match self.collection().insert_one(&revoked).await {
            Ok(_) => Ok(()),
            // 이미 등록된 토큰이면 성공으로 간주
            Err(e) if is_duplicate_key_error(&e) => Ok(()),
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    /// 토큰이 블랙리스트에 있는지 확인합니다.
    pub async fn contains(&self, token: &str) -> Result<bool, AppError> {
        let found = self
            .collection()
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    /// 시작 시 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 토큰 유니크 인덱스 (멱등 revoke의 근거)
        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("token_unique".to_string())
                    .build(),
            )
            .build();

        // TTL 인덱스: expires_at 경과 시 자동 삭제
        let ttl_index = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(
                IndexOptions::builder()
                    .expire_after(std::time::Duration::from_secs(0))
                    .name("expires_at_ttl".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([token_index, ttl_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

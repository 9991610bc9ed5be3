//! # 인증 코드 리포지토리 구현
//!
//! 이메일당 하나의 인증 코드 레코드를 upsert 방식으로 유지합니다.
//!
//! ## 단일 사용 보장
//!
//! "사용됨" 전환은 `{ email, code_hash, used: false }` 필터의
//! `find_one_and_update` 한 번으로 수행됩니다. 같은 코드를 동시에
//! 검증하는 두 요청 중 정확히 하나만 문서를 획득하며, 패배한 쪽은
//! 갱신 결과 없음으로 판별됩니다. 프로세스 간 공유 락이 없는 환경을
//! 전제로 저장소 원자성에만 의존합니다.

use std::sync::Arc;

use mongodb::{
    IndexModel,
    bson::{DateTime, doc},
    options::{IndexOptions, UpdateOptions},
};

use crate::db::Database;
use crate::domain::entities::verification::VerificationCode;
use crate::errors::AppError;

const COLLECTION_NAME: &str = "verification_codes";

/// 인증 코드 데이터 액세스 리포지토리
pub struct VerificationCodeRepository {
    db: Arc<Database>,
}

impl VerificationCodeRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<VerificationCode> {
        self.db.collection::<VerificationCode>(COLLECTION_NAME)
    }

    /// 이메일의 현재 코드 레코드를 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<VerificationCode>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 코드 해시로 레코드를 덮어씁니다 (없으면 생성).
    ///
    /// created_at과 used 플래그가 함께 초기화되므로 이전 코드는
    /// 이 시점부터 검증에 사용할 수 없습니다.
    pub async fn upsert(&self, email: &str, code_hash: &str) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "email": email },
                doc! {
                    "$set": {
                        "code_hash": code_hash,
                        "created_at": DateTime::now(),
                        "used": false,
                    }
                },
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 코드를 사용됨으로 전환합니다 (원자적 compare-and-set).
    ///
    /// 해시가 일치하고 아직 사용되지 않은 경우에만 성공하며,
    /// 성공 여부를 반환합니다. 동시 검증 시 최대 한 번만 성공합니다.
    pub async fn mark_used(&self, email: &str, code_hash: &str) -> Result<bool, AppError> {
        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "email": email, "code_hash": code_hash, "used": false },
                doc! { "$set": { "used": true } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(updated.is_some())
    }

    /// 시작 시 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

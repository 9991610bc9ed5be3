//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 이메일 유일성
//!
//! 이메일 유일성은 `email` 유니크 인덱스가 최종적으로 보장합니다.
//! 삽입 시 duplicate key(E11000) 에러를 `DuplicateEmail`로 변환하므로
//! 동시 가입 경쟁에서도 정확히 한 건만 성공합니다. 호출자는 항상
//! 소문자로 정규화된 이메일을 전달해야 합니다 (쓰기/읽기 공통).

use std::sync::Arc;

use mongodb::{IndexModel, bson::doc, options::IndexOptions};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::is_duplicate_key_error;

const COLLECTION_NAME: &str = "users";

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.collection::<User>(COLLECTION_NAME)
    }

    /// 정규화된 이메일로 사용자를 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자를 생성합니다.
    ///
    /// 이메일이 이미 존재하면 `DuplicateEmail`을 반환합니다.
    /// 사전 조회 없이 유니크 인덱스 에러에 의존하므로 동시 생성에 안전합니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::DuplicateEmail
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 이메일로 사용자를 삭제합니다.
    ///
    /// 삭제된 문서가 없으면 `false`를 반환합니다 (존재하지 않아도 에러 아님).
    pub async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let result = self
            .collection()
            .delete_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 시작 시 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 이메일 유니크 인덱스 (소문자 정규화를 전제로 한 단순 인덱스)
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

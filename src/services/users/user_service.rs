//! 사용자 계정 관리 서비스
//!
//! 사용자 생성, 조회, 삭제와 비밀번호 해싱을 담당합니다.
//! 이메일은 저장과 조회 양쪽에서 항상 정규화(트림 + 소문자)됩니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::entities::users::User;
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::normalize_email;

/// 사용자 계정 관리 서비스
pub struct UserService {
    config: Arc<AppConfig>,
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(config: Arc<AppConfig>, user_repo: Arc<UserRepository>) -> Self {
        Self { config, user_repo }
    }

    /// 비밀번호 해시 생성
    pub fn hash_password(&self, plaintext: &str) -> Result<String, AppError> {
        hash_password(
            &self.config.auth.password_salt,
            plaintext,
            self.config.auth.bcrypt_cost,
        )
    }

    /// 저장된 해시에 대한 비밀번호 검증
    pub fn verify_password(&self, plaintext: &str, stored_hash: &str) -> Result<bool, AppError> {
        verify_password(&self.config.auth.password_salt, plaintext, stored_hash)
    }

    /// 로컬(비밀번호) 계정 생성
    ///
    /// 이메일이 이미 존재하면 `DuplicateEmail`을 반환합니다.
    pub async fn create_local_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError> {
        let hashed = self.hash_password(password)?;
        let user = User::new_local(
            normalize_email(email),
            hashed,
            first_name.to_string(),
            last_name.to_string(),
        );

        self.user_repo.create(user).await
    }

    /// 연합(소셜) 계정 생성 또는 기존 계정 조회
    ///
    /// 생성 경합에서 중복 이메일 오류가 나면 기존 계정을 다시 조회합니다.
    pub async fn find_or_create_federated(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError> {
        let email = normalize_email(email);

        if let Some(user) = self.user_repo.find_by_email(&email).await? {
            return Ok(user);
        }

        let user = User::new_federated(email.clone(), first_name.to_string(), last_name.to_string());
        match self.user_repo.create(user).await {
            Ok(created) => Ok(created),
            Err(AppError::DuplicateEmail) => self
                .user_repo
                .find_by_email(&email)
                .await?
                .ok_or(AppError::InternalError(
                    "연합 계정 생성 경합 후 재조회 실패".to_string(),
                )),
            Err(e) => Err(e),
        }
    }

    /// 이메일로 사용자 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_email(&normalize_email(email)).await
    }

    /// 계정 삭제 (본인만 가능)
    ///
    /// 요청자와 대상 이메일이 다르면 `Forbidden`, 대상이 없으면 `NotFound`.
    pub async fn delete_user(
        &self,
        target_email: &str,
        requester: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        let target = normalize_email(target_email);

        if target != requester.email {
            log::warn!(
                "타인 계정 삭제 시도: 요청자={}, 대상={}",
                requester.email,
                target
            );
            return Err(AppError::Forbidden(
                "본인 계정만 삭제할 수 있습니다".to_string(),
            ));
        }

        if self.user_repo.delete_by_email(&target).await? {
            log::info!("계정 삭제 완료: {}", target);
            Ok(())
        } else {
            Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
        }
    }
}

/// 비밀번호 해시 생성 (bcrypt(salt + plaintext))
///
/// bcrypt 자체 솔트에 더해 설정된 고정 솔트를 평문 앞에 붙입니다.
/// 기존 저장 데이터와의 호환을 위해 이 순서는 변경할 수 없습니다.
pub(crate) fn hash_password(salt: &str, plaintext: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(format!("{}{}", salt, plaintext), cost)
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 비밀번호 검증 (bcrypt::verify(salt + plaintext, hash))
pub(crate) fn verify_password(
    salt: &str,
    plaintext: &str,
    stored_hash: &str,
) -> Result<bool, AppError> {
    bcrypt::verify(format!("{}{}", salt, plaintext), stored_hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트에서는 속도를 위해 최소 비용 사용
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("pepper", "hunter22", TEST_COST).unwrap();

        assert!(verify_password("pepper", "hunter22", &hash).unwrap());
        assert!(!verify_password("pepper", "hunter23", &hash).unwrap());
    }

    #[test]
    fn test_wrong_salt_fails_verification() {
        let hash = hash_password("pepper", "hunter22", TEST_COST).unwrap();

        assert!(!verify_password("other", "hunter22", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted_per_call() {
        let a = hash_password("pepper", "hunter22", TEST_COST).unwrap();
        let b = hash_password("pepper", "hunter22", TEST_COST).unwrap();

        // bcrypt 내부 솔트 때문에 같은 입력도 다른 해시가 나온다
        assert_ne!(a, b);
        assert!(verify_password("pepper", "hunter22", &a).unwrap());
        assert!(verify_password("pepper", "hunter22", &b).unwrap());
    }
}

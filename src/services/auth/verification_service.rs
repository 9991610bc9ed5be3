//! 이메일 인증 코드 관리 서비스
//!
//! 6자리 숫자 인증 코드의 발급, 전송, 검증을 담당합니다.
//!
//! ## 설계 노트
//!
//! - 코드 원문은 저장하지 않고 `sha256(salt + code)` 해시만 저장합니다.
//!   결정적 해시이므로 검증 시 저장된 해시와의 단일 원자 비교-교환
//!   연산으로 일회성 소모를 보장할 수 있습니다.
//! - 이메일당 최대 하나의 미사용 코드만 유지합니다 (upsert).
//! - 재요청 정책: 쿨다운(60초) 이내 재요청 거부, 미사용 코드가 아직
//!   유효(600초)하면 남은 시간 동안 거부.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rand::distributions::Uniform;
use sha2::{Digest, Sha256};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::repositories::verification::VerificationCodeRepository;
use crate::services::notifications::EmailService;
use crate::utils::string_utils::normalize_email;

/// 인증 코드 길이 (자리 수)
const CODE_LENGTH: usize = 6;

/// 이메일 인증 코드 관리 서비스
pub struct VerificationService {
    config: Arc<AppConfig>,
    repo: Arc<VerificationCodeRepository>,
    email_service: Arc<EmailService>,
}

impl VerificationService {
    pub fn new(
        config: Arc<AppConfig>,
        repo: Arc<VerificationCodeRepository>,
        email_service: Arc<EmailService>,
    ) -> Self {
        Self {
            config,
            repo,
            email_service,
        }
    }

    /// 새 인증 코드를 발급하고 이메일로 전송합니다.
    ///
    /// 재발급 정책에 걸리면 `RateLimited`와 함께 재시도 가능 시점까지
    /// 남은 초를 반환합니다. 이메일 전송 실패는 로그만 남기고 성공으로
    /// 처리합니다 (코드는 이미 저장되어 재검증 가능).
    pub async fn request_code(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let existing = self.repo.find_by_email(&email).await?;
        if let Some(record) = &existing {
            let elapsed = record.elapsed_secs(Utc::now());
            if let Some(remaining) = request_denied_for(
                record.used,
                elapsed,
                self.config.auth.code_cooldown_secs,
                self.config.auth.code_validity_secs,
            ) {
                log::info!("인증 코드 재요청 제한: {} ({}초 남음)", email, remaining);
                return Err(AppError::RateLimited {
                    retry_after_secs: remaining,
                });
            }
        }

        let code = generate_code();
        let code_hash = hash_code(&self.config.auth.password_salt, &code);

        self.repo.upsert(&email, &code_hash).await?;
        log::info!("인증 코드 발급 완료: {}", email);

        let subject = "이메일 인증 코드";
        let body = format!(
            "회원가입 인증 코드: {}\n\n이 코드는 {}분 동안 유효합니다.",
            code,
            self.config.auth.code_validity_secs / 60
        );
        if !self.email_service.send(&email, subject, &body).await {
            log::warn!("인증 코드 이메일 전송 실패: {}", email);
        }

        Ok(())
    }

    /// 제출된 코드를 검증하고 일회성으로 소모합니다.
    ///
    /// 성공하면 해당 코드는 `used` 상태가 되어 다시 사용할 수 없습니다.
    /// 실패 원인(없음/만료/사용됨/불일치)은 구분된 오류로 반환합니다.
    pub async fn validate_code(&self, email: &str, code: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let record = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AppError::CodeNotFound)?;

        if record.elapsed_secs(Utc::now()) >= self.config.auth.code_validity_secs {
            return Err(AppError::CodeExpired);
        }

        if record.used {
            return Err(AppError::CodeAlreadyUsed);
        }

        let submitted_hash = hash_code(&self.config.auth.password_salt, code);

        // 미사용 + 해시 일치 조건의 원자적 갱신. 동시 요청 간 경합에서도
        // 정확히 하나의 요청만 성공한다.
        if self.repo.mark_used(&email, &submitted_hash).await? {
            return Ok(());
        }

        // 갱신 실패: 해시가 다르거나, 조회와 갱신 사이에 다른 요청이 먼저 소모함
        if record.code_hash != submitted_hash {
            Err(AppError::CodeMismatch)
        } else {
            Err(AppError::CodeAlreadyUsed)
        }
    }
}

/// 6자리 숫자 인증 코드 생성
pub(crate) fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    let digit_range = Uniform::new_inclusive(0u8, 9);

    (0..CODE_LENGTH)
        .map(|_| char::from(b'0' + rng.sample(digit_range)))
        .collect()
}

/// 인증 코드 해시 계산 (sha256(salt + code), 소문자 16진수)
pub(crate) fn hash_code(salt: &str, code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

/// 재발급 정책 판정
///
/// 거부해야 하면 `Some(남은 초)`, 허용이면 `None`을 반환합니다.
/// 쿨다운 거부가 유효기간 거부보다 우선합니다.
pub(crate) fn request_denied_for(
    used: bool,
    elapsed_secs: i64,
    cooldown_secs: i64,
    validity_secs: i64,
) -> Option<i64> {
    if elapsed_secs < cooldown_secs {
        return Some(cooldown_secs - elapsed_secs);
    }
    if !used && elapsed_secs < validity_secs {
        return Some(validity_secs - elapsed_secs);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: i64 = 60;
    const VALIDITY: i64 = 600;

    #[test]
    fn test_generated_code_is_six_digits() {
        for _ in 0..50 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_hash_is_deterministic_and_salt_sensitive() {
        let a = hash_code("salt", "123456");
        let b = hash_code("salt", "123456");
        let c = hash_code("other", "123456");
        let d = hash_code("salt", "654321");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_request_within_cooldown_is_denied() {
        let remaining = request_denied_for(false, 10, COOLDOWN, VALIDITY);
        assert_eq!(remaining, Some(50));

        // 사용된 코드라도 쿨다운은 적용된다
        let remaining = request_denied_for(true, 30, COOLDOWN, VALIDITY);
        assert_eq!(remaining, Some(30));
    }

    #[test]
    fn test_unused_valid_code_blocks_reissue_until_expiry() {
        let remaining = request_denied_for(false, 120, COOLDOWN, VALIDITY);
        assert_eq!(remaining, Some(480));
    }

    #[test]
    fn test_used_code_past_cooldown_allows_reissue() {
        assert_eq!(request_denied_for(true, 61, COOLDOWN, VALIDITY), None);
    }

    #[test]
    fn test_expired_code_allows_reissue() {
        assert_eq!(request_denied_for(false, 600, COOLDOWN, VALIDITY), None);
        assert_eq!(request_denied_for(false, 10_000, COOLDOWN, VALIDITY), None);
    }

    #[test]
    fn test_policy_boundaries() {
        // 정확히 쿨다운 경계에서는 허용 범위로 넘어간다
        assert_eq!(request_denied_for(true, 60, COOLDOWN, VALIDITY), None);
        // 유효기간 마지막 1초 전까지는 미사용 코드가 재발급을 막는다
        assert_eq!(
            request_denied_for(false, 599, COOLDOWN, VALIDITY),
            Some(1)
        );
    }
}

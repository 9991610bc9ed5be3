//! 인증 코드 엔티티
//!
//! 이메일당 하나의 레코드만 유지하는 단일 사용 인증 코드입니다.
//! 코드 평문은 절대 저장하지 않으며 salt가 적용된 SHA-256 해시만 저장합니다.
//! 레코드는 삭제되지 않고 다음 요청 시 제자리에서 덮어써집니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 이메일별 인증 코드 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCode {
    /// 수신 이메일 (소문자 정규화, unique)
    pub email: String,
    /// `sha256(salt + code)`의 hex 인코딩
    pub code_hash: String,
    /// 코드 생성 시각 (쿨다운/유효 시간의 기준점)
    pub created_at: DateTime,
    /// 사용 여부 (검증 성공 시 true로 전환, 단 한 번만)
    pub used: bool,
}

impl VerificationCode {
    pub fn new(email: String, code_hash: String) -> Self {
        Self {
            email,
            code_hash,
            created_at: DateTime::now(),
            used: false,
        }
    }

    /// 생성 이후 경과 시간 (초)
    pub fn elapsed_secs(&self, now: chrono::DateTime<chrono::Utc>) -> i64 {
        (now - self.created_at.to_chrono()).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_unused() {
        let record = VerificationCode::new("a@x.com".to_string(), "abc123".to_string());
        assert!(!record.used);
    }

    #[test]
    fn test_elapsed_secs() {
        let record = VerificationCode::new("a@x.com".to_string(), "abc123".to_string());

        let later = record.created_at.to_chrono() + chrono::Duration::seconds(90);
        assert_eq!(record.elapsed_secs(later), 90);

        // 시계가 뒤로 간 경우 음수가 나올 수 있다 (정책 판정에서 쿨다운으로 처리)
        let earlier = record.created_at.to_chrono() - chrono::Duration::seconds(5);
        assert_eq!(record.elapsed_secs(earlier), -5);
    }
}

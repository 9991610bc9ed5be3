//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::errors::AppError;

/// 이메일 주소를 정규화합니다.
///
/// 저장/조회의 모든 경로에서 소문자 정규화를 일관되게 적용합니다.
/// 이메일 유일성은 정규화된 형태를 기준으로 판단합니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{} is required",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 표시 이름을 이름/성으로 분할합니다.
///
/// Google 프로필의 `name` 클레임처럼 "First Last" 형태의 문자열에서
/// 첫 단어를 이름으로, 두 번째 단어를 성으로 사용합니다.
/// 단어가 부족하면 빈 문자열로 채웁니다.
pub fn split_display_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or("").to_string();
    let last = parts.next().unwrap_or("").to_string();
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_and_trims() {
        assert_eq!(normalize_email("User@Example.COM"), "user@example.com");
        assert_eq!(normalize_email("  a@x.com  "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_validate_required_string() {
        assert_eq!(
            validate_required_string("  hello  ", "name").unwrap(),
            "hello"
        );
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
    }

    #[test]
    fn test_split_display_name() {
        assert_eq!(
            split_display_name("John Doe"),
            ("John".to_string(), "Doe".to_string())
        );
        assert_eq!(
            split_display_name("Madonna"),
            ("Madonna".to_string(), String::new())
        );
        assert_eq!(split_display_name(""), (String::new(), String::new()));
        // 세 단어 이상이면 앞의 두 단어만 사용
        assert_eq!(
            split_display_name("Jean Claude Van Damme"),
            ("Jean".to_string(), "Claude".to_string())
        );
    }
}

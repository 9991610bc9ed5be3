//! 인증 관련 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청
///
/// 인증 코드가 먼저 검증/소모된 뒤에야 계정 생성이 시도됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// 이메일로 발송된 6자리 숫자 코드
    #[validate(length(equal = 6, message = "verification code must be 6 digits"))]
    pub code: String,
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
}

/// 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 인증 코드 발송 요청
#[derive(Debug, Deserialize, Validate)]
pub struct RequestCodeRequest {
    #[validate(email(message = "valid email is required"))]
    pub email: String,
}

/// 토큰 갱신 요청
#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// 로그아웃 요청
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// Google 로그인 요청 (클라이언트가 받은 ID 토큰)
#[derive(Debug, Deserialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

/// 코드 발송 결과 응답
#[derive(Debug, Serialize)]
pub struct RequestCodeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            email: "a@x.com".to_string(),
            password: "password1".to_string(),
            code: "123456".to_string(),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid_clone(&valid)
        };
        assert!(bad_email.validate().is_err());

        let short_code = SignupRequest {
            code: "123".to_string(),
            ..valid_clone(&valid)
        };
        assert!(short_code.validate().is_err());

        let short_password = SignupRequest {
            password: "short".to_string(),
            ..valid_clone(&valid)
        };
        assert!(short_password.validate().is_err());
    }

    fn valid_clone(r: &SignupRequest) -> SignupRequest {
        SignupRequest {
            email: r.email.clone(),
            password: r.password.clone(),
            code: r.code.clone(),
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
        }
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = LoginRequest {
            email: "bad".to_string(),
            password: "pw".to_string(),
        };
        assert!(invalid.validate().is_err());
    }
}

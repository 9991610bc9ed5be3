//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정/협업 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 공개 정책
//!
//! - 인증 실패(`InvalidCredentials`, `AuthenticationFailed`)는 이메일 존재 여부나
//!   구체적인 실패 원인을 절대 노출하지 않습니다.
//! - 인증 코드 실패(`CodeExpired`, `CodeAlreadyUsed`, `CodeMismatch`)는 정상적인
//!   재시도를 돕기 위해 의도적으로 구체적인 원인을 노출합니다.
//! - `RateLimited`는 남은 대기 시간을 초 단위로 함께 전달합니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 이메일 또는 비밀번호 불일치 (401 Unauthorized)
    ///
    /// 사용자 없음과 비밀번호 불일치를 구분하지 않는 단일 메시지입니다.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// 이미 등록된 이메일 (409 Conflict)
    #[error("User with this email already exists")]
    DuplicateEmail,

    /// 토큰 검증 실패 (401 Unauthorized)
    ///
    /// 만료/서명 오류/페이로드 손상을 구분하지 않고 동일한 메시지로 응답합니다.
    /// 구체적인 원인은 서버 로그에만 남습니다.
    #[error("Invalid or expired token")]
    AuthenticationFailed,

    /// 로그아웃으로 무효화된 리프레시 토큰 (401 Unauthorized)
    #[error("Refresh token has been revoked")]
    TokenRevoked,

    /// 해당 이메일로 발급된 인증 코드 없음 (404 Not Found)
    #[error("No verification code found for this email")]
    CodeNotFound,

    /// 인증 코드 유효 시간 초과 (400 Bad Request)
    #[error("Verification code has expired")]
    CodeExpired,

    /// 이미 사용된 인증 코드 (400 Bad Request)
    #[error("Verification code has already been used")]
    CodeAlreadyUsed,

    /// 인증 코드 불일치 (400 Bad Request)
    #[error("Verification code does not match")]
    CodeMismatch,

    /// 인증 코드 재요청 제한 (429 Too Many Requests)
    ///
    /// 남은 대기 시간(초)을 페이로드로 전달합니다.
    #[error("Please wait {retry_after_secs} seconds before requesting a new code")]
    RateLimited { retry_after_secs: i64 },

    /// 외부 프로바이더(Google) 토큰 검증 실패 (400 Bad Request)
    #[error("Invalid Google token")]
    InvalidProviderToken,

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 본인 소유가 아닌 리소스 접근 (403 Forbidden)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 저장소 연결 실패는 복구 대상이 아니며 그대로 상위로 전파됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AppError::TokenRevoked => StatusCode::UNAUTHORIZED,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::CodeNotFound => StatusCode::NOT_FOUND,
            AppError::CodeExpired => StatusCode::BAD_REQUEST,
            AppError::CodeAlreadyUsed => StatusCode::BAD_REQUEST,
            AppError::CodeMismatch => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::InvalidProviderToken => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut builder = actix_web::HttpResponse::build(status);

        // 재요청 제한은 Retry-After 헤더와 남은 초를 함께 전달
        if let AppError::RateLimited { retry_after_secs } = self {
            builder.insert_header(("Retry-After", retry_after_secs.to_string()));
            return builder.json(serde_json::json!({
                "error": self.to_string(),
                "retry_after_secs": retry_after_secs
            }));
        }

        builder.json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_duplicate_email_response() {
        let error = AppError::DuplicateEmail;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_token_revoked_distinct_from_authentication_failed() {
        // 로그아웃된 토큰과 일반 검증 실패는 메시지가 달라야 한다
        assert_ne!(
            AppError::TokenRevoked.to_string(),
            AppError::AuthenticationFailed.to_string()
        );
        assert_eq!(
            AppError::TokenRevoked.error_response().status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_code_error_responses() {
        assert_eq!(
            AppError::CodeNotFound.error_response().status(),
            actix_web::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CodeExpired.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::CodeAlreadyUsed.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::CodeMismatch.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_rate_limited_response_includes_retry_after() {
        let error = AppError::RateLimited { retry_after_secs: 42 };
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::TOO_MANY_REQUESTS
        );
        let header = response.headers().get("Retry-After").unwrap();
        assert_eq!(header.to_str().unwrap(), "42");
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_authentication_failed_message_is_generic() {
        // 만료/서명/형식 오류가 동일한 메시지로 수렴하는지 확인
        let msg = AppError::AuthenticationFailed.to_string();
        assert_eq!(msg, "Invalid or expired token");
    }
}

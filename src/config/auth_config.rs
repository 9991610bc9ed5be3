//! # Authentication Configuration Module
//!
//! JWT 토큰, 비밀번호 해싱, 인증 코드 정책, Google 연동 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-jwt-key"
//! export ACCESS_TOKEN_EXPIRE_MINUTES="30"
//! export REFRESH_TOKEN_EXPIRE_DAYS="7"
//! ```
//!
//! ### 비밀번호 해싱 설정
//! ```bash
//! # 모든 비밀번호 앞에 붙는 애플리케이션 공용 salt
//! export PASSWORD_SALT="your-password-salt"
//! export BCRYPT_COST="12"
//! ```
//!
//! ### 인증 코드 정책
//! ```bash
//! export CODE_VALIDITY_SECONDS="600"   # 코드 유효 시간 (10분)
//! export CODE_COOLDOWN_SECONDS="60"    # 재요청 최소 간격 (1분)
//! ```
//!
//! ### Google 로그인 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-client-id.apps.googleusercontent.com"
//! ```
//!
//! ## 설계 노트
//!
//! 기존에는 각 컴포넌트가 필요할 때마다 환경 변수를 직접 읽었지만,
//! 이 모듈은 시작 시점에 모든 값을 한 번만 읽어 불변 구조체로 고정합니다.
//! 숨은 전역 상태 없이 `Arc<AppConfig>`로 명시적으로 주입됩니다.

use std::env;

use crate::config::data_config::{Environment, parse_env};

/// 인증 서브시스템 설정
///
/// 토큰 서명, 비밀번호 salt, 인증 코드 정책을 한 곳에 모은 불변 설정입니다.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT 서명 비밀키 (액세스/리프레시 공용, HS256)
    pub jwt_secret: String,
    /// 비밀번호 해싱 시 평문 앞에 붙는 애플리케이션 공용 salt
    ///
    /// 사용자별 랜덤 salt가 아니라 프로세스 전역 비밀 문자열입니다.
    /// `hash(salt + plaintext)` 형태가 저장 포맷이므로 변경하면
    /// 기존 모든 비밀번호 검증이 깨집니다.
    pub password_salt: String,
    /// bcrypt cost factor (4~15)
    pub bcrypt_cost: u32,
    /// 액세스 토큰 수명 (분)
    pub access_token_minutes: i64,
    /// 리프레시 토큰 수명 (일)
    pub refresh_token_days: i64,
    /// 인증 코드 유효 시간 (초)
    pub code_validity_secs: i64,
    /// 인증 코드 재요청 최소 간격 (초)
    pub code_cooldown_secs: i64,
    /// Google OAuth Client ID (ID 토큰의 audience 검증에 사용)
    pub google_client_id: String,
}

impl AuthConfig {
    /// 환경 변수에서 인증 설정을 읽습니다.
    ///
    /// 비밀키/salt가 설정되지 않은 경우 개발용 기본값을 사용하며
    /// 경고 로그를 남깁니다. 프로덕션에서는 반드시 설정해야 합니다.
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET_KEY not set, using default (not secure for production!)");
            "dev-jwt-secret".to_string()
        });

        let password_salt = env::var("PASSWORD_SALT").unwrap_or_else(|_| {
            log::warn!("PASSWORD_SALT not set, using default (not secure for production!)");
            "dev-password-salt".to_string()
        });

        Self {
            jwt_secret,
            password_salt,
            bcrypt_cost: Self::bcrypt_cost_from_env(),
            access_token_minutes: parse_env("ACCESS_TOKEN_EXPIRE_MINUTES", 30),
            refresh_token_days: parse_env("REFRESH_TOKEN_EXPIRE_DAYS", 7),
            code_validity_secs: parse_env("CODE_VALIDITY_SECONDS", 600),
            code_cooldown_secs: parse_env("CODE_COOLDOWN_SECONDS", 60),
            google_client_id: env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
        }
    }

    /// bcrypt cost를 결정합니다.
    ///
    /// `BCRYPT_COST`가 유효 범위(4~15)로 설정되어 있으면 그 값을,
    /// 아니면 실행 환경별 기본값을 사용합니다.
    fn bcrypt_cost_from_env() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
                log::warn!("BCRYPT_COST {} out of range (4-15), using environment default", cost);
            }
        }
        Environment::current().default_bcrypt_cost()
    }

    /// 테스트용 고정 설정
    ///
    /// 단위 테스트에서 환경 변수 없이 결정적인 값을 사용하기 위한 생성자입니다.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            jwt_secret: "test-jwt-secret".to_string(),
            password_salt: "test-salt".to_string(),
            bcrypt_cost: 4,
            access_token_minutes: 30,
            refresh_token_days: 7,
            code_validity_secs: 600,
            code_cooldown_secs: 60,
            google_client_id: "test-client-id".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_windows() {
        let config = AuthConfig::for_tests();

        // 인증 코드 정책: 유효 10분, 재요청 간격 1분
        assert_eq!(config.code_validity_secs, 600);
        assert_eq!(config.code_cooldown_secs, 60);
        // 쿨다운은 유효 시간보다 짧아야 정책 순서가 성립한다
        assert!(config.code_cooldown_secs < config.code_validity_secs);
    }

    #[test]
    fn test_default_token_lifetimes() {
        let config = AuthConfig::for_tests();

        assert_eq!(config.access_token_minutes, 30);
        assert_eq!(config.refresh_token_days, 7);
    }
}

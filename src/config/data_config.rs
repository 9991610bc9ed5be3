//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, SMTP, 실행 환경 관련 설정을 관리합니다.
//! 모든 설정은 시작 시점에 한 번 읽혀 불변 구조체로 고정되며,
//! 이후에는 `Arc<AppConfig>`로 각 컴포넌트에 주입됩니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 bcrypt cost
    ///
    /// 개발/테스트 환경에서는 빠른 피드백을, 프로덕션에서는 보안을 우선합니다.
    pub fn default_bcrypt_cost(&self) -> u32 {
        match self {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 및 저장소 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트
    pub host: String,
    /// 바인딩 포트
    pub port: u16,
    /// 워커 스레드 수
    pub workers: usize,
    /// MongoDB 연결 URI
    pub mongodb_uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// Rate Limiting: 초당 허용 요청 수
    pub rate_limit_per_second: u64,
    /// Rate Limiting: 버스트 크기
    pub rate_limit_burst_size: u32,
}

impl ServerConfig {
    /// 환경 변수에서 서버 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8080),
            workers: parse_env("WORKERS", 4),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "account_collab_dev".to_string()),
            rate_limit_per_second: parse_env("RATE_LIMIT_PER_SECOND", 100),
            rate_limit_burst_size: parse_env("RATE_LIMIT_BURST_SIZE", 200),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 인증 코드 메일 발송용 SMTP 설정
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP 서버 호스트 (예: smtp.gmail.com)
    pub host: String,
    /// SMTP 서버 포트 (보통 587)
    pub port: u16,
    /// SMTP 인증 사용자명
    pub username: String,
    /// SMTP 인증 비밀번호 (앱 비밀번호 권장)
    pub password: String,
    /// 발신자 표시 주소
    pub from_address: String,
}

impl SmtpConfig {
    /// 환경 변수에서 SMTP 설정을 읽습니다.
    ///
    /// 계정 정보가 비어 있어도 서버는 기동합니다. 발송 실패는
    /// 로깅 후 무시되는 정책이므로 (코드는 저장됨) 치명적이지 않습니다.
    pub fn from_env() -> Self {
        let username = env::var("SMTP_USERNAME").unwrap_or_default();
        if username.is_empty() {
            log::warn!("SMTP_USERNAME not set, verification emails will fail to send");
        }

        Self {
            from_address: env::var("SMTP_FROM").unwrap_or_else(|_| username.clone()),
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port: parse_env("SMTP_PORT", 587),
            password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            username,
        }
    }
}

/// 환경 변수를 파싱하고 실패 시 기본값을 사용합니다.
pub(crate) fn parse_env<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);

        // 알 수 없는 값은 프로덕션으로 취급 (안전한 기본값)
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_bcrypt_cost_per_environment() {
        assert_eq!(Environment::Development.default_bcrypt_cost(), 4);
        assert_eq!(Environment::Test.default_bcrypt_cost(), 4);
        assert_eq!(Environment::Staging.default_bcrypt_cost(), 10);
        assert_eq!(Environment::Production.default_bcrypt_cost(), 12);
    }

    #[test]
    fn test_bind_address_format() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9090,
            workers: 4,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "test_db".to_string(),
            rate_limit_per_second: 100,
            rate_limit_burst_size: 200,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }
}

//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 `AppConfig::from_env()`로 시작 시점에 한 번 구성되고,
//! 이후 `Arc<AppConfig>`로 각 서비스 생성자에 주입됩니다.

pub mod auth_config;
pub mod data_config;

pub use auth_config::AuthConfig;
pub use data_config::{Environment, ServerConfig, SmtpConfig};

/// 애플리케이션 전체 설정
///
/// 초기화 이후 읽기 전용입니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            auth: AuthConfig::from_env(),
            server: ServerConfig::from_env(),
            smtp: SmtpConfig::from_env(),
        }
    }

}

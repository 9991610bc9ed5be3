//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀링은 드라이버가 처리하며, 이 모듈은 설정 주입과
//! 컬렉션 접근만을 담당합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! let config = AppConfig::from_env();
//! let database = Database::new(&config.server).await?;
//! let users = database.collection::<User>("users");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::ServerConfig;

/// MongoDB 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 설정으로부터 MongoDB에 연결합니다.
    ///
    /// 연결 직후 `ping` 명령으로 연결 상태를 확인합니다.
    /// 연결 실패는 이 계층에서 복구하지 않고 그대로 전파합니다.
    pub async fn new(config: &ServerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("account_collab".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::Collection<T> {
        self.get_database().collection::<T>(name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

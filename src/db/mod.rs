//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 시 `ping` 명령으로 서버 가용성을 확인합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let managers = database.get_database().collection::<Manager>("managers");
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// `Client`는 내부적으로 연결 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Invalid MongoDB URI: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("call_audit_backend".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping failed: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

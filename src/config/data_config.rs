//! 서버, 데이터베이스, CORS 설정

use std::env;

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    /// - `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME` (기본값: "call_audit_dev")
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "call_audit_dev".to_string()),
        }
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// 쿠키 인증을 사용하는 프론트엔드 Origin
    pub fn frontend_url() -> String {
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_URI").is_err() && env::var("DATABASE_NAME").is_err() {
            let config = DatabaseConfig::from_env();
            assert_eq!(config.uri, "mongodb://localhost:27017");
            assert_eq!(config.database_name, "call_audit_dev");
        }
    }
}

//! 인증 관련 설정
//!
//! JWT 서명 비밀키와 알고리즘은 프로세스 시작 시 한 번 로드되어
//! [`JwtConfig`] 값으로 토큰 코덱에 주입됩니다. 이후 변경되지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ALGORITHM="HS256"     # HS256 | HS384 | HS512
//! export JWT_LEEWAY_SECS="0"       # exp 검증 허용 오차 (초)
//! ```

use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::errors::{AppError, AppResult};

/// 인증 토큰을 담는 쿠키 이름
pub const AUTH_COOKIE_NAME: &str = "token";

const DEFAULT_SECRET: &str = "jwt_secret";

/// JWT 검증 설정
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    algorithm: Algorithm,
    leeway_secs: u64,
}

impl JwtConfig {
    /// 공유 비밀키 기반(HMAC) 알고리즘만 허용합니다.
    pub fn new(secret: impl Into<String>, algorithm: Algorithm) -> AppResult<Self> {
        let secret = secret.into();

        if secret.is_empty() {
            return Err(AppError::ConfigError("JWT secret must not be empty".to_string()));
        }

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(AppError::ConfigError(format!(
                "Unsupported JWT algorithm {:?}: only HS256, HS384 and HS512 are supported",
                algorithm
            )));
        }

        Ok(Self {
            secret,
            algorithm,
            leeway_secs: 0,
        })
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    pub fn from_env() -> AppResult<Self> {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_SECRET.to_string()
        });

        let algorithm = parse_algorithm(
            &env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
        )?;

        let leeway_secs = match env::var("JWT_LEEWAY_SECS") {
            Ok(raw) => parse_leeway(&raw)?,
            Err(_) => 0,
        };

        Ok(Self::new(secret, algorithm)?.with_leeway(leeway_secs))
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn leeway_secs(&self) -> u64 {
        self.leeway_secs
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("algorithm", &self.algorithm)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

fn parse_algorithm(name: &str) -> AppResult<Algorithm> {
    Algorithm::from_str(name.trim())
        .map_err(|_| AppError::ConfigError(format!("Unknown JWT algorithm: {}", name)))
}

fn parse_leeway(raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid JWT_LEEWAY_SECS: {}", raw)))
}

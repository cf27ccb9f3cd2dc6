//! JWT 토큰 코덱
//!
//! 공유 비밀키와 알고리즘은 생성 시점에 고정됩니다.
//! 검증 실패 원인은 [`TokenError`]로 구분되지만, 인증 리졸버는
//! 이를 모두 `InvalidToken` 하나로 접고 원인은 로그에만 남깁니다.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;
use thiserror::Error;

use crate::config::JwtConfig;
use crate::domain::models::token::{TokenClaims, EXPIRES_AT_CLAIM, NOT_BEFORE_CLAIM};

/// 토큰 서명/검증 실패 원인
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is not yet valid")]
    NotYetValid,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token algorithm is not accepted")]
    UnsupportedAlgorithm,

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::ImmatureSignature => TokenError::NotYetValid,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::UnsupportedAlgorithm
            }
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

/// 토큰 서명 및 검증 계약
pub trait TokenCodec: Send + Sync {
    fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError>;

    fn decode(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// `jsonwebtoken` 기반 HMAC 코덱
pub struct JwtTokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(config.algorithm());
        // exp/nbf가 있으면 검증하고, 없으면 허용
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = config.leeway_secs();

        Self {
            algorithm: config.algorithm(),
            encoding_key: EncodingKey::from_secret(config.secret().as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret().as_bytes()),
            validation,
        }
    }

    /// `jsonwebtoken`은 `u64`로 읽히지 않는 `exp`/`nbf`를 건너뛰므로
    /// 문자열이나 음수로 담긴 시각을 여기서 다시 확인합니다.
    fn check_time_claims(&self, claims: &TokenClaims) -> Result<(), TokenError> {
        let now = Utc::now().timestamp();
        let leeway = i64::try_from(self.validation.leeway).unwrap_or(i64::MAX);

        if let Some(exp) = claims.claim(EXPIRES_AT_CLAIM) {
            if numeric_date(EXPIRES_AT_CLAIM, exp)? < now.saturating_sub(leeway) {
                return Err(TokenError::Expired);
            }
        }

        if let Some(nbf) = claims.claim(NOT_BEFORE_CLAIM) {
            if numeric_date(NOT_BEFORE_CLAIM, nbf)? > now.saturating_add(leeway) {
                return Err(TokenError::NotYetValid);
            }
        }

        Ok(())
    }
}

/// 정수, 소수(버림), 정수 문자열을 초 단위 시각으로 읽습니다
fn numeric_date(name: &str, value: &Value) -> Result<i64, TokenError> {
    let parsed = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| TokenError::Malformed(format!("{} claim must be an integer", name)))
}

impl TokenCodec for JwtTokenCodec {
    fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        self.check_time_claims(&data.claims)?;
        Ok(data.claims)
    }
}

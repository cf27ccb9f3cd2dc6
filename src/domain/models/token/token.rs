//! JWT 클레임 구조체
//!
//! 서명 검증을 통과한 토큰의 페이로드를 그대로 보관하는 맵입니다.
//! 발급 시각(`iat`)과 만료(`exp`)는 토큰 코덱이 다루고,
//! 인증 리졸버는 `email`과 `role`만 읽습니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const EMAIL_CLAIM: &str = "email";
pub const ROLE_CLAIM: &str = "role";
pub const EXPIRES_AT_CLAIM: &str = "exp";
pub const NOT_BEFORE_CLAIM: &str = "nbf";

/// JWT 토큰의 클레임(Payload)
///
/// 필수 클레임 누락을 역직렬화 에러가 아닌 페이로드 에러로 구분하기 위해
/// 고정 구조체 대신 JSON 맵으로 디코딩합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenClaims(Map<String, Value>);

impl TokenClaims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_claim(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn without_claim(mut self, name: &str) -> Self {
        self.0.remove(name);
        self
    }

    /// 클레임 값을 조회합니다. JSON `null`은 없는 것으로 취급합니다.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }
}

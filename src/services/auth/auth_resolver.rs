//! 인증 리졸버
//!
//! 요청의 `token` 쿠키에서 현재 사용자를 결정하는 단일 파이프라인입니다.
//!
//! ```text
//! 쿠키 추출 → 서명/만료 검증 → 클레임 확인 → 역할별 저장소 조회 → Principal
//!    │              │                │               │
//!    ▼              ▼                ▼               ▼
//! Missing      InvalidToken   InvalidTokenPayload  PrincipalNotFound
//! Credentials                 UnauthorizedRole     InternalVerificationFailure
//! ```
//!
//! 상태를 갖지 않으므로 `web::Data`로 모든 워커가 공유합니다.
//! 같은 토큰과 같은 저장소 상태에 대해 항상 같은 결과를 반환합니다.

use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::HttpRequest;
use log::{debug, error, info, warn};
use serde_json::Value;

use crate::config::AUTH_COOKIE_NAME;
use crate::domain::models::auth::{Principal, Role};
use crate::domain::models::token::{TokenClaims, EMAIL_CLAIM, ROLE_CLAIM};
use crate::errors::AuthError;
use crate::repositories::UserStore;
use super::token_codec::TokenCodec;

pub type AuthOutcome = Result<Principal, AuthError>;

/// 쿠키를 읽을 수 있는 요청 추상화
pub trait CookieSource {
    fn cookie_value(&self, name: &str) -> Option<String>;
}

impl CookieSource for HttpRequest {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.cookie(name).map(|cookie| cookie.value().to_string())
    }
}

impl CookieSource for ServiceRequest {
    fn cookie_value(&self, name: &str) -> Option<String> {
        self.cookie(name).map(|cookie| cookie.value().to_string())
    }
}

pub struct AuthResolver {
    codec: Arc<dyn TokenCodec>,
    store: Arc<dyn UserStore>,
}

impl AuthResolver {
    pub fn new(codec: Arc<dyn TokenCodec>, store: Arc<dyn UserStore>) -> Self {
        Self { codec, store }
    }

    /// 요청을 인증하고 역할에 맞는 사용자 레코드를 로드합니다.
    ///
    /// # Errors
    ///
    /// * `MissingCredentials` - 쿠키 없음 또는 빈 값
    /// * `InvalidToken` - 서명 불일치, 형식 오류, 허용되지 않는 알고리즘, 만료, 아직 유효하지 않은 `nbf`
    /// * `InvalidTokenPayload` - `email`/`role` 누락, 문자열이 아닌 `email`
    /// * `UnauthorizedRole` - `manager`/`auditor` 이외의 역할
    /// * `PrincipalNotFound` - 해당 역할 컬렉션에 계정 없음
    /// * `InternalVerificationFailure` - 저장소 장애
    pub async fn authenticate<C>(&self, source: &C) -> AuthOutcome
    where
        C: CookieSource + ?Sized,
    {
        let token = source
            .cookie_value(AUTH_COOKIE_NAME)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                warn!("인증 실패: 토큰 쿠키 없음");
                AuthError::MissingCredentials
            })?;

        let claims = self.codec.decode(&token).map_err(|e| {
            warn!("인증 실패: 토큰 검증 오류 ({})", e);
            AuthError::InvalidToken
        })?;

        let (email, role) = read_identity(&claims)?;
        debug!("토큰 검증 완료: {} ({})", email, role);

        let principal = match role {
            Role::Manager => self
                .store
                .fetch_manager_by_email(email)
                .await
                .map(|found| found.map(Principal::Manager)),
            Role::Auditor => self
                .store
                .fetch_auditor_by_email(email)
                .await
                .map(|found| found.map(Principal::Auditor)),
        };

        match principal {
            Ok(Some(principal)) => {
                info!("✅ 인증 성공: {} ({})", principal.email(), principal.role());
                Ok(principal)
            }
            Ok(None) => {
                warn!("인증 실패: {} 계정 없음 ({})", role, email);
                Err(AuthError::PrincipalNotFound(role))
            }
            Err(e) => {
                error!("사용자 검증 중 내부 오류: {}", e);
                Err(AuthError::InternalVerificationFailure)
            }
        }
    }
}

/// `email`과 `role` 클레임을 해석합니다.
///
/// 둘 중 하나라도 없으면 역할 해석보다 페이로드 에러가 우선합니다.
fn read_identity(claims: &TokenClaims) -> Result<(&str, Role), AuthError> {
    let (Some(email), Some(role)) = (claims.claim(EMAIL_CLAIM), claims.claim(ROLE_CLAIM)) else {
        warn!("인증 실패: email 또는 role 클레임 누락");
        return Err(AuthError::InvalidTokenPayload);
    };

    let Value::String(email) = email else {
        warn!("인증 실패: email 클레임이 문자열이 아님");
        return Err(AuthError::InvalidTokenPayload);
    };

    let role = role.as_str().and_then(Role::from_claim).ok_or_else(|| {
        warn!("인증 실패: 허용되지 않은 역할 {}", role);
        AuthError::UnauthorizedRole
    })?;

    Ok((email.as_str(), role))
}

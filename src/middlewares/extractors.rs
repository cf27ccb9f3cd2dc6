//! 핸들러용 인증 주체 추출자
//!
//! 역할 가드 미들웨어가 이미 해석한 주체가 있으면 request extensions에서 꺼내고,
//! 없으면 그 자리에서 [`AuthResolver`]를 실행합니다.
//!
//! ```rust,ignore
//! #[get("/check-auth")]
//! pub async fn check_auth(principal: Principal) -> HttpResponse { /* ... */ }
//!
//! #[get("/profile")]
//! pub async fn get_profile(manager: AuthenticatedManager) -> HttpResponse { /* ... */ }
//! ```

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::entities::users::{Auditor, Manager};
use crate::domain::models::auth::Principal;
use crate::errors::{AppError, AuthError};
use crate::services::auth::AuthResolver;

impl FromRequest for Principal {
    type Error = AuthError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { resolve_principal(&req).await })
    }
}

async fn resolve_principal(req: &HttpRequest) -> Result<Principal, AuthError> {
    let cached = req.extensions().get::<Principal>().cloned();
    if let Some(principal) = cached {
        return Ok(principal);
    }

    let Some(resolver) = req.app_data::<web::Data<AuthResolver>>() else {
        log::error!("AuthResolver가 애플리케이션 데이터에 등록되지 않았습니다");
        return Err(AuthError::InternalVerificationFailure);
    };

    resolver.authenticate(req).await
}

/// 매니저 전용 핸들러 인자
#[derive(Debug, Clone)]
pub struct AuthenticatedManager(pub Manager);

impl FromRequest for AuthenticatedManager {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let principal = Principal::from_request(req, payload);

        Box::pin(async move {
            match principal.await? {
                Principal::Manager(manager) => Ok(AuthenticatedManager(manager)),
                Principal::Auditor(auditor) => {
                    log::warn!("권한 부족: 감사자 {}가 매니저 전용 리소스에 접근", auditor.email);
                    Err(AppError::AuthorizationError("Manager role required".to_string()))
                }
            }
        })
    }
}

/// 감사자 전용 핸들러 인자
#[derive(Debug, Clone)]
pub struct AuthenticatedAuditor(pub Auditor);

impl FromRequest for AuthenticatedAuditor {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let principal = Principal::from_request(req, payload);

        Box::pin(async move {
            match principal.await? {
                Principal::Auditor(auditor) => Ok(AuthenticatedAuditor(auditor)),
                Principal::Manager(manager) => {
                    log::warn!("권한 부족: 매니저 {}가 감사자 전용 리소스에 접근", manager.email);
                    Err(AppError::AuthorizationError("Auditor role required".to_string()))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use super::*;
    use crate::config::AUTH_COOKIE_NAME;
    use crate::domain::models::auth::Role;
    use crate::testing::{self, InMemoryUserStore};

    #[actix_web::test]
    async fn test_principal_from_extensions_skips_lookup() {
        let store = Arc::new(InMemoryUserStore::new());
        let req = TestRequest::default()
            .app_data(web::Data::new(testing::resolver(store.clone())))
            .to_http_request();
        let sarah = testing::sarah();
        req.extensions_mut().insert(Principal::Manager(sarah.clone()));

        let principal = Principal::extract(&req).await.unwrap();

        assert_eq!(principal, Principal::Manager(sarah));
        assert_eq!(store.lookups(), 0);
    }

    #[actix_web::test]
    async fn test_principal_resolved_from_cookie() {
        let store = Arc::new(InMemoryUserStore::new().with_auditor(testing::priya("m-1")));
        let token = testing::token_for("priya.nair@company.com", Role::Auditor);
        let req = TestRequest::default()
            .app_data(web::Data::new(testing::resolver(store)))
            .cookie(Cookie::new(AUTH_COOKIE_NAME, token))
            .to_http_request();

        let principal = Principal::extract(&req).await.unwrap();

        assert_eq!(principal.role(), Role::Auditor);
    }

    #[actix_web::test]
    async fn test_missing_resolver_is_internal_failure() {
        let req = TestRequest::default().to_http_request();

        let error = Principal::extract(&req).await.unwrap_err();

        assert_eq!(error, AuthError::InternalVerificationFailure);
    }

    #[actix_web::test]
    async fn test_manager_extractor_rejects_auditor() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(Principal::Auditor(testing::priya("m-1")));

        let error = AuthenticatedManager::extract(&req).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_auditor_extractor_keeps_auth_status() {
        let store = Arc::new(InMemoryUserStore::new());
        let req = TestRequest::default()
            .app_data(web::Data::new(testing::resolver(store)))
            .to_http_request();

        let error = AuthenticatedAuditor::extract(&req).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }
}

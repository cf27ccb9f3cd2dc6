//! API 라우트 설정 모듈
//!
//! 인증 상태 확인, 역할별 스코프, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Auth Middleware Usage
//!
//! ## 추출자 기반 인증 (역할 무관)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::auth::check_auth) // Principal 추출자가 인증
//! );
//! ```
//!
//! ## 역할 가드 스코프
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/manager")
//!         .wrap(AuthMiddleware::require(Role::Manager)) // 감사자는 403
//!         .service(handlers::managers::get_profile)
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(resolver.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::domain::models::auth::Role;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// `web::Data<AuthResolver>`가 애플리케이션 데이터로 등록되어 있어야 합니다.
/// 등록되지 않은 상태에서 보호된 라우트를 호출하면 500으로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_role_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/auth/check-auth` - 현재 사용자 정보 조회
/// - `GET /api/v1/auth/logout` - `token` 쿠키 삭제
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/v1/auth/check-auth \
///   --cookie "token=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::check_auth)
            .service(handlers::auth::logout)
    );
}

/// 역할별 라우트를 설정합니다
///
/// 각 스코프는 하나의 역할만 허용하며, 다른 역할의 토큰은 403으로 거부됩니다.
fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/manager")
            .wrap(AuthMiddleware::require(Role::Manager))
            .service(handlers::managers::get_profile)
    );

    cfg.service(
        web::scope("/api/v1/auditor")
            .wrap(AuthMiddleware::require(Role::Auditor))
            .service(handlers::auditors::get_profile)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "call_audit_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::{time::Duration, Cookie};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::config::AUTH_COOKIE_NAME;
    use crate::domain::models::token::{TokenClaims, EMAIL_CLAIM, ROLE_CLAIM};
    use crate::services::auth::AuthResolver;
    use crate::testing::{self, InMemoryUserStore};

    fn resolver_data(store: InMemoryUserStore) -> web::Data<AuthResolver> {
        web::Data::new(testing::resolver(Arc::new(store)))
    }

    fn seeded_store() -> InMemoryUserStore {
        let sarah = testing::sarah();
        let priya = testing::priya(&sarah.id);
        InMemoryUserStore::new().with_manager(sarah).with_auditor(priya)
    }

    fn get(uri: &str, token: Option<String>) -> actix_web::test::TestRequest {
        let req = test::TestRequest::get().uri(uri);
        match token {
            Some(token) => req.cookie(Cookie::new(AUTH_COOKIE_NAME, token)),
            None => req,
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let resp = test::call_service(&app, get("/health", None).to_request()).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_check_auth_for_stored_manager() {
        let app = test::init_service(
            App::new()
                .app_data(resolver_data(seeded_store()))
                .configure(configure_all_routes),
        )
        .await;
        let token = testing::token_for("sarah.johnson@company.com", Role::Manager);

        let resp = test::call_service(&app, get("/api/v1/auth/check-auth", Some(token)).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User is authenticated");
        assert_eq!(body["user"]["email"], "sarah.johnson@company.com");
        assert_eq!(body["user"]["role"], "manager");
    }

    #[actix_web::test]
    async fn test_check_auth_error_statuses() {
        let app = test::init_service(
            App::new()
                .app_data(resolver_data(seeded_store()))
                .configure(configure_all_routes),
        )
        .await;

        let payload_without_email = testing::sign(
            &TokenClaims::new().with_claim(ROLE_CLAIM, "manager"),
        );
        let admin_role = testing::sign(
            &TokenClaims::new()
                .with_claim(EMAIL_CLAIM, "sarah.johnson@company.com")
                .with_claim(ROLE_CLAIM, "admin"),
        );

        let cases = [
            (None, StatusCode::UNAUTHORIZED, "missing_credentials", "Authentication token is missing"),
            (Some("garbage".to_string()), StatusCode::UNAUTHORIZED, "invalid_token", "Invalid or expired token"),
            (Some(payload_without_email), StatusCode::UNAUTHORIZED, "invalid_token_payload", "Invalid token payload"),
            (
                Some(testing::token_for("ghost@company.com", Role::Auditor)),
                StatusCode::NOT_FOUND,
                "principal_not_found",
                "Auditor not found",
            ),
            (
                Some(admin_role),
                StatusCode::BAD_REQUEST,
                "unauthorized_role",
                "Invalid user role: user must be either manager or auditor",
            ),
        ];

        for (token, status, kind, message) in cases {
            let resp = test::call_service(&app, get("/api/v1/auth/check-auth", token).to_request()).await;

            assert_eq!(resp.status(), status, "kind: {}", kind);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], kind);
            assert_eq!(body["message"], message);
        }
    }

    #[actix_web::test]
    async fn test_store_outage_returns_generic_500() {
        let app = test::init_service(
            App::new()
                .app_data(resolver_data(seeded_store().failing()))
                .configure(configure_all_routes),
        )
        .await;
        let token = testing::token_for("sarah.johnson@company.com", Role::Manager);

        let resp = test::call_service(&app, get("/api/v1/auth/check-auth", Some(token)).to_request()).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User verification failed due to internal server error");
    }

    #[actix_web::test]
    async fn test_role_scopes() {
        let app = test::init_service(
            App::new()
                .app_data(resolver_data(seeded_store()))
                .configure(configure_all_routes),
        )
        .await;
        let manager_token = testing::token_for("sarah.johnson@company.com", Role::Manager);
        let auditor_token = testing::token_for("priya.nair@company.com", Role::Auditor);

        let resp = test::call_service(
            &app,
            get("/api/v1/manager/profile", Some(manager_token.clone())).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            get("/api/v1/auditor/profile", Some(auditor_token.clone())).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["role"], "auditor");
        assert!(body["manager_id"].is_string());

        let resp = test::call_service(
            &app,
            get("/api/v1/manager/profile", Some(auditor_token)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = test::call_service(
            &app,
            get("/api/v1/auditor/profile", Some(manager_token)).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_logout_clears_token_cookie() {
        let app = test::init_service(
            App::new()
                .app_data(resolver_data(seeded_store()))
                .configure(configure_all_routes),
        )
        .await;
        let token = testing::token_for("priya.nair@company.com", Role::Auditor);

        let resp = test::call_service(&app, get("/api/v1/auth/logout", Some(token)).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let removal = resp
            .response()
            .cookies()
            .find(|cookie| cookie.name() == AUTH_COOKIE_NAME)
            .expect("removal cookie");
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(Duration::ZERO));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Successfully logged out");
    }

    #[actix_web::test]
    async fn test_logout_requires_authentication() {
        let app = test::init_service(
            App::new()
                .app_data(resolver_data(seeded_store()))
                .configure(configure_all_routes),
        )
        .await;

        let resp = test::call_service(&app, get("/api/v1/auth/logout", None).to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

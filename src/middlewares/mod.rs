//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어와
//! 인증 주체 추출자를 제공합니다.
//!
//! # 제공 기능
//!
//! ### 1. 역할 가드 미들웨어 (AuthMiddleware)
//! - `token` 쿠키 기반 인증
//! - 요구 역할이 다르면 403 응답
//! - 해석된 Principal을 request extension에 저장
//!
//! ### 2. 추출자
//! - `Principal`: 역할과 무관하게 인증된 사용자
//! - `AuthenticatedManager` / `AuthenticatedAuditor`: 역할 고정 사용자
//!
//! # 사용 방법
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(resolver.clone())
//!     .service(
//!         web::scope("/api/v1/manager")
//!             .wrap(AuthMiddleware::require(Role::Manager)) // 매니저만 접근
//!             .service(handlers::managers::get_profile)
//!     )
//!     .service(
//!         web::scope("/api/v1/auth")
//!             .service(handlers::auth::check_auth) // 추출자가 직접 인증
//!     )
//! ```

pub mod auth_middleware;
pub mod extractors;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use extractors::{AuthenticatedAuditor, AuthenticatedManager};

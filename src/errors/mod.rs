//! 애플리케이션 에러 모듈
//!
//! - [`errors`] - 애플리케이션 전역 에러 (`AppError`)
//! - [`auth_errors`] - 인증 파이프라인 전용 에러 (`AuthError`, `AuthErrorKind`)

pub mod errors;
pub mod auth_errors;

pub use errors::*;
pub use auth_errors::*;

//! 인증 서비스 모듈
//!
//! 쿠키로 전달된 JWT를 검증하고 역할에 맞는 사용자를 로드합니다.
//!
//! # Security
//!
//! - HMAC(HS256/HS384/HS512) 서명 검증
//! - `exp` 클레임이 있으면 만료 검증
//! - 검증 실패 원인은 로그에만 기록하고 클라이언트에는 단일 메시지로 응답
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthResolver;
//!
//! match resolver.authenticate(&req).await {
//!     Ok(Principal::Manager(manager)) => { /* ... */ }
//!     Ok(Principal::Auditor(auditor)) => { /* ... */ }
//!     Err(err) => return Err(err.into()),
//! }
//! ```

pub mod token_codec;
pub mod auth_resolver;

pub use token_codec::{JwtTokenCodec, TokenCodec, TokenError};
pub use auth_resolver::{AuthOutcome, AuthResolver, CookieSource};

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 레지스트리 없이 생성 시점에 의존성을 주입받습니다.
//! `main`에서 한 번 조립한 뒤 `web::Data`로 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{AuthResolver, JwtTokenCodec};
//!
//! let codec = Arc::new(JwtTokenCodec::new(&jwt_config));
//! let resolver = web::Data::new(AuthResolver::new(codec, Arc::new(store)));
//! ```

pub mod auth;

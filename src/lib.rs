//! 통화 감사 백엔드
//!
//! 매니저는 통화를 업로드하고 감사자는 통화를 평가합니다.
//! 두 역할 모두 로그인 시 발급된 JWT를 `token` 쿠키로 제출하며,
//! 이 크레이트는 그 토큰으로 현재 사용자를 결정하는 인증/인가 계층을 제공합니다.
//!
//! # Features
//!
//! - **쿠키 JWT 인증**: HMAC 서명 검증과 만료 확인
//! - **닫힌 역할 집합**: `manager` / `auditor` 외의 역할은 거부
//! - **역할별 저장소 조회**: 요청마다 MongoDB에서 사용자 레코드 로드
//! - **정밀한 실패 구분**: 잘못된 토큰, 계정 없음, 역할 오류를 서로 다른 상태 코드로 응답
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 역할 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← Principal 추출자
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AuthResolver   │ ← TokenCodec + UserStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← managers / auditors 컬렉션
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use call_audit_backend::services::auth::{AuthResolver, JwtTokenCodec};
//! use call_audit_backend::repositories::MongoUserStore;
//!
//! let resolver = AuthResolver::new(
//!     Arc::new(JwtTokenCodec::new(&jwt_config)),
//!     Arc::new(MongoUserStore::new(&database)),
//! );
//! let principal = resolver.authenticate(&req).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod testing;

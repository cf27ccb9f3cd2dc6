//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 인증은 핸들러 인자의 추출자(`Principal`, `AuthenticatedManager`,
//! `AuthenticatedAuditor`)가 담당하므로 핸들러 본문은 응답 구성만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser)                  쿠키: token
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares / Extractors - 인증, 역할 가드
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - AuthResolver
//! ├─────────────────────────────────────────────┤
//!   Repositories - managers / auditors 컬렉션
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 인증 상태 확인 (`GET /auth/check-auth`), 로그아웃 (`GET /auth/logout`)
//! - **`managers`**: 매니저 프로필 (`GET /manager/profile`)
//! - **`auditors`**: 감사자 프로필 (`GET /auditor/profile`)

pub mod auth;
pub mod managers;
pub mod auditors;

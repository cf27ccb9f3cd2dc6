//! 인증 도메인 모델
//!
//! - [`role::Role`] - 토큰 `role` 클레임의 닫힌 집합
//! - [`principal::Principal`] - 요청별 인증 주체 (Manager | Auditor)

pub mod role;
pub mod principal;

pub use role::Role;
pub use principal::Principal;

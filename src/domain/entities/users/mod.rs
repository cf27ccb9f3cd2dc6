//! Users Entity Module
//!
//! 시스템에 로그인할 수 있는 두 종류의 계정을 정의합니다.
//! 두 엔티티는 서로 다른 컬렉션에 저장되며 공통 기반 타입이 없습니다.
//!
//! - [`manager::Manager`] - `managers` 컬렉션
//! - [`auditor::Auditor`] - `auditors` 컬렉션
//!
//! 계정 생성은 이 서비스의 범위가 아니므로 두 엔티티는 조회 전용입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::Manager;
//!
//! let manager: Option<Manager> = managers.find_one(doc! { "email": email }).await?;
//! ```

pub mod manager;
pub mod auditor;

pub use manager::Manager;
pub use auditor::Auditor;

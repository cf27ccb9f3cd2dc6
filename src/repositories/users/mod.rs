//! 사용자 데이터 액세스 계층
//!
//! 역할마다 독립된 컬렉션과 리포지토리를 가집니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::ManagerRepository;
//!
//! let repo = ManagerRepository::new(&database);
//! let manager = repo.find_by_email("sarah.johnson@company.com").await?;
//! ```

pub mod manager_repo;
pub mod auditor_repo;

pub use manager_repo::ManagerRepository;
pub use auditor_repo::AuditorRepository;

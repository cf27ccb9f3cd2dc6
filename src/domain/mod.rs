//! 도메인 계층
//!
//! ```text
//! domain/
//! ├── entities/   # MongoDB 문서 매핑 (Manager, Auditor)
//! ├── models/     # 인증 값 객체 (Role, Principal, TokenClaims)
//! └── dto/        # API 응답 계약
//! ```

pub mod entities;
pub mod dto;
pub mod models;

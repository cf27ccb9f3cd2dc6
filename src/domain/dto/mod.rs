//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 클라이언트에게 전달되는 응답 구조를 정의합니다.
//! 엔티티를 그대로 노출하지 않고 필요한 필드만 골라 직렬화합니다.

pub mod users;

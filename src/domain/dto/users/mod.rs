//! 사용자 관련 DTO

pub mod response;

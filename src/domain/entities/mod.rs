//! 엔티티 모듈
//!
//! MongoDB 컬렉션에 1:1로 매핑되는 영속 엔티티를 정의합니다.

pub mod users;

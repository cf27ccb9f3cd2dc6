//! 도메인 모델 모듈
//!
//! 저장소 엔티티와 별개로 인증 과정에서 생성되는 값 객체들을 정의합니다.
//!
//! - [`auth`] - 역할(`Role`)과 인증 주체(`Principal`)
//! - [`token`] - 디코딩된 JWT 클레임(`TokenClaims`)

pub mod auth;
pub mod token;

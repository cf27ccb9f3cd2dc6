//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, MongoDB, CORS 설정
//! - [`auth_config`] - JWT 검증 설정과 인증 쿠키 이름
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="call_audit_dev"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ALGORITHM="HS256"
//!
//! # 프론트엔드 (CORS)
//! export FRONTEND_URL="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

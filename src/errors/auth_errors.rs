//! 인증 파이프라인 에러
//!
//! [`AuthResolver`](crate::services::auth::AuthResolver)가 반환하는 실패 유형입니다.
//! 여섯 가지 종류는 서로 배타적이며 각각 정확히 하나의 HTTP 상태 코드로 매핑됩니다.
//!
//! | 종류 | 상태 코드 |
//! |------|-----------|
//! | `MissingCredentials` | 401 |
//! | `InvalidToken` | 401 |
//! | `InvalidTokenPayload` | 401 |
//! | `PrincipalNotFound` | 404 |
//! | `UnauthorizedRole` | 400 |
//! | `InternalVerificationFailure` | 500 |
//!
//! 리졸버 자체는 전송 계층을 알지 못하며, 상태 코드 변환은
//! `ResponseError` 구현을 통해 라우트 경계에서만 일어납니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::auth::role::Role;

/// 클라이언트가 분기 처리에 사용하는 기계 판독용 에러 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    MissingCredentials,
    InvalidToken,
    InvalidTokenPayload,
    PrincipalNotFound,
    UnauthorizedRole,
    InternalVerificationFailure,
}

impl AuthErrorKind {
    /// 라우트 계층에서 사용할 HTTP 상태 코드
    pub fn status_code(self) -> StatusCode {
        match self {
            AuthErrorKind::MissingCredentials
            | AuthErrorKind::InvalidToken
            | AuthErrorKind::InvalidTokenPayload => StatusCode::UNAUTHORIZED,
            AuthErrorKind::PrincipalNotFound => StatusCode::NOT_FOUND,
            AuthErrorKind::UnauthorizedRole => StatusCode::BAD_REQUEST,
            AuthErrorKind::InternalVerificationFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 인증 실패
///
/// `Display` 구현이 곧 클라이언트에게 전달되는 메시지입니다.
/// `InternalVerificationFailure`는 저장소나 인프라 정보를 담지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// `token` 쿠키가 없거나 비어 있음
    #[error("Authentication token is missing")]
    MissingCredentials,

    /// 서명 불일치, 형식 오류, 지원하지 않는 알고리즘, 만료
    #[error("Invalid or expired token")]
    InvalidToken,

    /// `email` 또는 `role` 클레임 누락
    #[error("Invalid token payload")]
    InvalidTokenPayload,

    /// 토큰은 유효하지만 해당 역할의 계정이 저장소에 없음
    #[error("{} not found", .0.title())]
    PrincipalNotFound(Role),

    /// `manager`/`auditor` 이외의 역할
    #[error("Invalid user role: user must be either manager or auditor")]
    UnauthorizedRole,

    /// 저장소 장애 등 시스템 오류
    #[error("User verification failed due to internal server error")]
    InternalVerificationFailure,
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::MissingCredentials => AuthErrorKind::MissingCredentials,
            AuthError::InvalidToken => AuthErrorKind::InvalidToken,
            AuthError::InvalidTokenPayload => AuthErrorKind::InvalidTokenPayload,
            AuthError::PrincipalNotFound(_) => AuthErrorKind::PrincipalNotFound,
            AuthError::UnauthorizedRole => AuthErrorKind::UnauthorizedRole,
            AuthError::InternalVerificationFailure => AuthErrorKind::InternalVerificationFailure,
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.kind(),
                "message": self.to_string()
            }))
    }
}

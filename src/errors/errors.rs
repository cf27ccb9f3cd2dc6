//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 인증 파이프라인의 실패는
//! [`AuthError`](super::AuthError)로 표현되며 `AppError::Auth`로 감싸져
//! 동일한 응답 형식을 유지합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn find_manager(&self, email: &str) -> AppResult<Option<Manager>> {
//!     self.collection
//!         .find_one(doc! { "email": email })
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use super::auth_errors::AuthError;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
/// 5xx 에러는 내부 메시지를 서버 로그에만 남기고 클라이언트에는 노출하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정값 누락 또는 잘못된 설정 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 인증은 되었지만 요청한 리소스에 대한 역할이 맞지 않음 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 인증 파이프라인 실패 (상태 코드는 `AuthError`가 결정)
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::Auth(err) => err.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// ```json
    /// { "error": "forbidden", "message": "Manager role required" }
    /// ```
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Auth(err) => err.error_response(),
            AppError::AuthorizationError(msg) => HttpResponse::build(self.status_code())
                .json(serde_json::json!({
                    "error": "forbidden",
                    "message": msg
                })),
            _ => {
                log::error!("내부 서버 에러: {}", self);
                HttpResponse::build(self.status_code())
                    .json(serde_json::json!({
                        "error": "internal_error",
                        "message": "Internal server error"
                    }))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

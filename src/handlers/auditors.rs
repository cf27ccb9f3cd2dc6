//! 감사자 전용 핸들러
use actix_web::{get, HttpResponse};

use crate::domain::dto::users::response::UserSummary;
use crate::middlewares::AuthenticatedAuditor;

/// # Endpoint
/// `GET /api/v1/auditor/profile`
#[get("/profile")]
pub async fn get_profile(AuthenticatedAuditor(auditor): AuthenticatedAuditor) -> HttpResponse {
    HttpResponse::Ok().json(UserSummary::from(&auditor))
}

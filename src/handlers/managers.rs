//! 매니저 전용 핸들러
use actix_web::{get, HttpResponse};

use crate::domain::dto::users::response::UserSummary;
use crate::middlewares::AuthenticatedManager;

/// # Endpoint
/// `GET /api/v1/manager/profile`
#[get("/profile")]
pub async fn get_profile(AuthenticatedManager(manager): AuthenticatedManager) -> HttpResponse {
    HttpResponse::Ok().json(UserSummary::from(&manager))
}

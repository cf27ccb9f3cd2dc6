//! Authentication HTTP Handlers
//!
//! 쿠키 기반 인증 상태 확인과 로그아웃 엔드포인트입니다.
//! 토큰 발급(로그인)은 이 서비스의 범위가 아닙니다.
use actix_web::cookie::Cookie;
use actix_web::{get, HttpResponse};

use crate::config::AUTH_COOKIE_NAME;
use crate::domain::dto::users::response::{BaseResponse, CheckAuthResponse};
use crate::domain::models::auth::Principal;

/// 인증 상태 확인 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/check-auth`
#[get("/check-auth")]
pub async fn check_auth(principal: Principal) -> HttpResponse {
    HttpResponse::Ok().json(CheckAuthResponse::authenticated(&principal))
}

/// 로그아웃 핸들러
///
/// 인증된 사용자의 `token` 쿠키를 만료시킵니다.
///
/// # Endpoint
/// `GET /api/v1/auth/logout`
#[get("/logout")]
pub async fn logout(principal: Principal) -> HttpResponse {
    let mut cookie = Cookie::build(AUTH_COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();

    log::info!("👋 로그아웃: {} ({})", principal.email(), principal.role());

    HttpResponse::Ok()
        .cookie(cookie)
        .json(BaseResponse::ok("Successfully logged out"))
}

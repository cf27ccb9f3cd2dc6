//! 역할 기반 인증 미들웨어
//!
//! 스코프 단위로 [`AuthResolver`](crate::services::auth::AuthResolver)를 실행하고,
//! 요구 역할과 일치하는 경우에만 요청을 핸들러로 전달합니다.
//! 해석된 [`Principal`](crate::domain::models::auth::Principal)은 request extensions에
//! 저장되어 같은 요청의 추출자가 저장소를 다시 조회하지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::Role;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 역할 기반 인증 미들웨어
pub struct AuthMiddleware {
    /// 스코프 접근에 필요한 역할
    required_role: Role,
}

impl AuthMiddleware {
    /// 특정 역할을 요구하는 인증 미들웨어 생성
    pub fn require(required_role: Role) -> Self {
        Self { required_role }
    }

    pub fn managers_only() -> Self {
        Self::require(Role::Manager)
    }

    pub fn auditors_only() -> Self {
        Self::require(Role::Auditor)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::Role;
use crate::errors::{AppError, AuthError};
use crate::services::auth::AuthResolver;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Role,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            let Some(resolver) = req.app_data::<web::Data<AuthResolver>>().cloned() else {
                log::error!("AuthResolver가 애플리케이션 데이터에 등록되지 않았습니다");
                return Ok(reject(req, AuthError::InternalVerificationFailure.error_response()));
            };

            let principal = match resolver.authenticate(&req).await {
                Ok(principal) => principal,
                Err(err) => return Ok(reject(req, err.error_response())),
            };

            // 역할 검증
            if principal.role() != required_role {
                log::warn!("권한 부족: {} ({}), 필요 역할: {}",
                    principal.email(), principal.role(), required_role);
                let err = AppError::AuthorizationError(
                    format!("{} role required", required_role.title())
                );
                return Ok(reject(req, err.error_response()));
            }

            // 사용자 정보를 Request Extensions에 저장
            log::debug!("역할 검증 통과: {} ({})", principal.email(), required_role);
            req.extensions_mut().insert(principal);

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 핸들러를 호출하지 않고 에러 응답으로 요청을 종료합니다.
fn reject<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

//! 사용자 응답 DTO
//!
//! 인증 상태 확인, 로그아웃, 프로필 조회 응답에 사용됩니다.

use serde::Serialize;

use crate::domain::entities::users::{Auditor, Manager};
use crate::domain::models::auth::{Principal, Role};

/// 성공 여부와 메시지만 담는 기본 응답
#[derive(Debug, Serialize)]
pub struct BaseResponse {
    pub success: bool,
    pub message: String,
}

impl BaseResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// 클라이언트에 노출되는 사용자 요약 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// 감사자의 소속 매니저 ID (매니저는 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

impl From<&Manager> for UserSummary {
    fn from(manager: &Manager) -> Self {
        Self {
            id: manager.id.clone(),
            name: manager.name.clone(),
            email: manager.email.clone(),
            role: Role::Manager,
            manager_id: None,
        }
    }
}

impl From<&Auditor> for UserSummary {
    fn from(auditor: &Auditor) -> Self {
        Self {
            id: auditor.id.clone(),
            name: auditor.name.clone(),
            email: auditor.email.clone(),
            role: Role::Auditor,
            manager_id: Some(auditor.manager_id.clone()),
        }
    }
}

impl From<&Principal> for UserSummary {
    fn from(principal: &Principal) -> Self {
        match principal {
            Principal::Manager(manager) => manager.into(),
            Principal::Auditor(auditor) => auditor.into(),
        }
    }
}

/// `GET /api/v1/auth/check-auth` 응답
#[derive(Debug, Serialize)]
pub struct CheckAuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserSummary,
}

impl CheckAuthResponse {
    pub fn authenticated(principal: &Principal) -> Self {
        Self {
            success: true,
            message: "User is authenticated".to_string(),
            user: principal.into(),
        }
    }
}

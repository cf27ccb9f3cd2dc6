use crate::domain::entities::users::{Auditor, Manager};
use super::role::Role;

/// 요청마다 저장소에서 새로 로드되는 인증 주체
///
/// 토큰 하나는 정확히 하나의 역할로 해석되며 두 변형은 서로 배타적입니다.
/// 핸들러는 변형에 따라 역할별 동작을 분기합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Manager(Manager),
    Auditor(Auditor),
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Principal::Manager(_) => Role::Manager,
            Principal::Auditor(_) => Role::Auditor,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Principal::Manager(manager) => &manager.id,
            Principal::Auditor(auditor) => &auditor.id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Manager(manager) => &manager.email,
            Principal::Auditor(auditor) => &auditor.email,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Principal::Manager(manager) => &manager.name,
            Principal::Auditor(auditor) => &auditor.name,
        }
    }

    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            Principal::Manager(manager) => Some(manager),
            Principal::Auditor(_) => None,
        }
    }

    pub fn as_auditor(&self) -> Option<&Auditor> {
        match self {
            Principal::Auditor(auditor) => Some(auditor),
            Principal::Manager(_) => None,
        }
    }
}

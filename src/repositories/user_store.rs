//! 역할별 사용자 조회 계약
//!
//! 인증 리졸버는 구체적인 저장소를 알지 못하고 [`UserStore`]만 의존합니다.
//! 두 조회 경로는 서로 독립적이며 한쪽에서 찾지 못했다고 다른 쪽으로
//! 넘어가지 않습니다.

use async_trait::async_trait;

use crate::db::Database;
use crate::domain::entities::users::{Auditor, Manager};
use crate::errors::AppResult;
use super::users::{AuditorRepository, ManagerRepository};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 매니저를 조회합니다. 없으면 `Ok(None)`.
    async fn fetch_manager_by_email(&self, email: &str) -> AppResult<Option<Manager>>;

    /// 이메일로 감사자를 조회합니다. 없으면 `Ok(None)`.
    async fn fetch_auditor_by_email(&self, email: &str) -> AppResult<Option<Auditor>>;
}

/// MongoDB 기반 [`UserStore`] 구현
#[derive(Clone)]
pub struct MongoUserStore {
    managers: ManagerRepository,
    auditors: AuditorRepository,
}

impl MongoUserStore {
    pub fn new(database: &Database) -> Self {
        Self {
            managers: ManagerRepository::new(database),
            auditors: AuditorRepository::new(database),
        }
    }

    /// 두 컬렉션의 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.managers.create_indexes().await?;
        self.auditors.create_indexes().await
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn fetch_manager_by_email(&self, email: &str) -> AppResult<Option<Manager>> {
        self.managers.find_by_email(email).await
    }

    async fn fetch_auditor_by_email(&self, email: &str) -> AppResult<Option<Auditor>> {
        self.auditors.find_by_email(email).await
    }
}

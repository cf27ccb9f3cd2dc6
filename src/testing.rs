//! 테스트 전용 헬퍼
//!
//! 메모리 기반 [`UserStore`]와 토큰 발급 유틸리티를 제공합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use mongodb::bson;
use jsonwebtoken::Algorithm;

use crate::config::JwtConfig;
use crate::domain::entities::users::{Auditor, Manager};
use crate::domain::models::auth::Role;
use crate::domain::models::token::{TokenClaims, EMAIL_CLAIM, EXPIRES_AT_CLAIM, ROLE_CLAIM};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserStore;
use crate::services::auth::{AuthResolver, JwtTokenCodec, TokenCodec};

pub const TEST_SECRET: &str = "jwt_secret";

#[derive(Default)]
pub struct InMemoryUserStore {
    managers: Vec<Manager>,
    auditors: Vec<Auditor>,
    failing: bool,
    lookups: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manager(mut self, manager: Manager) -> Self {
        self.managers.push(manager);
        self
    }

    pub fn with_auditor(mut self, auditor: Auditor) -> Self {
        self.auditors.push(auditor);
        self
    }

    /// 모든 조회가 데이터베이스 에러를 반환하도록 설정
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> AppResult<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AppError::DatabaseError(
                "server selection timeout: mongodb://db:27017".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn fetch_manager_by_email(&self, email: &str) -> AppResult<Option<Manager>> {
        self.check_available()?;
        Ok(self.managers.iter().find(|m| m.email == email).cloned())
    }

    async fn fetch_auditor_by_email(&self, email: &str) -> AppResult<Option<Auditor>> {
        self.check_available()?;
        Ok(self.auditors.iter().find(|a| a.email == email).cloned())
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET, Algorithm::HS256).unwrap()
}

pub fn codec() -> JwtTokenCodec {
    JwtTokenCodec::new(&jwt_config())
}

pub fn resolver(store: Arc<InMemoryUserStore>) -> AuthResolver {
    AuthResolver::new(Arc::new(codec()), store)
}

pub fn sign(claims: &TokenClaims) -> String {
    codec().encode(claims).unwrap()
}

/// 로그인 시 발급되는 것과 같은 모양의 클레임
pub fn claims_for(email: &str, role: Role, expires_at: DateTime<Utc>) -> TokenClaims {
    TokenClaims::new()
        .with_claim(EMAIL_CLAIM, email)
        .with_claim(ROLE_CLAIM, role.as_str())
        .with_claim("iat", Utc::now().timestamp())
        .with_claim(EXPIRES_AT_CLAIM, expires_at.timestamp())
}

/// 한 시간 뒤 만료되는 표준 토큰
pub fn token_for(email: &str, role: Role) -> String {
    sign(&claims_for(email, role, Utc::now() + Duration::hours(1)))
}

pub fn manager(name: &str, email: &str) -> Manager {
    let now = bson::DateTime::now();
    Manager {
        id: format!("manager:{}", email),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn auditor(manager_id: &str, name: &str, email: &str) -> Auditor {
    let now = bson::DateTime::now();
    Auditor {
        id: format!("auditor:{}", email),
        manager_id: manager_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sarah() -> Manager {
    manager("Sarah Johnson", "sarah.johnson@company.com")
}

pub fn priya(manager_id: &str) -> Auditor {
    auditor(manager_id, "Priya Nair", "priya.nair@company.com")
}

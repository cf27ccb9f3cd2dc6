//! # 매니저 리포지토리 구현
//!
//! `managers` 컬렉션에 대한 읽기 전용 조회와 인덱스 관리를 담당합니다.
//! 인증 주체는 요청마다 새로 조회해야 하므로 캐시 계층을 두지 않습니다.

use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::Manager;
use crate::errors::{AppError, AppResult};

pub const MANAGER_COLLECTION: &str = "managers";

#[derive(Clone)]
pub struct ManagerRepository {
    collection: Collection<Manager>,
}

impl ManagerRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Manager>(MANAGER_COLLECTION),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Manager>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

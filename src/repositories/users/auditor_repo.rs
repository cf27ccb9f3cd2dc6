//! # 감사자 리포지토리 구현
//!
//! `auditors` 컬렉션에 대한 읽기 전용 조회와 인덱스 관리를 담당합니다.

use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::Auditor;
use crate::errors::{AppError, AppResult};

pub const AUDITOR_COLLECTION: &str = "auditors";

#[derive(Clone)]
pub struct AuditorRepository {
    collection: Collection<Auditor>,
}

impl AuditorRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Auditor>(AUDITOR_COLLECTION),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Auditor>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 매니저별 감사자 목록 조회용
        let manager_index = IndexModel::builder()
            .keys(doc! { "manager_id": 1 })
            .options(IndexOptions::builder()
                .name("manager_id_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, manager_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

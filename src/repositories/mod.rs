//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 저장소로 사용하며, 인증 리졸버에는
//! [`UserStore`](user_store::UserStore) 트레이트로만 노출됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::user_store::MongoUserStore;
//!
//! let store = MongoUserStore::new(&database);
//! store.ensure_indexes().await?;
//! let resolver = AuthResolver::new(codec, Arc::new(store));
//! ```

pub mod users;
pub mod user_store;

pub use user_store::{MongoUserStore, UserStore};

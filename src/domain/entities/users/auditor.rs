//! Auditor Entity
//!
//! 통화를 청취하고 점수를 매기는 감사자 계정입니다.
//! 각 감사자는 한 명의 매니저에 소속됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auditor {
    #[serde(rename = "_id")]
    pub id: String,
    /// 소속 매니저 ID
    pub manager_id: String,
    pub name: String,
    /// 로그인 이메일 (unique)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 매니저가 비활성화한 감사자는 false
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

fn default_active() -> bool {
    true
}

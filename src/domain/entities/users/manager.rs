//! Manager Entity
//!
//! 통화 업로드와 감사자 관리를 담당하는 매니저 계정입니다.
//! `managers` 컬렉션에 저장되며 이메일은 유일합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 매니저 엔티티
///
/// 비밀번호 등 인증 이외의 필드는 이 구조체에 매핑하지 않습니다.
/// 문서에 남아 있는 추가 필드는 역직렬화 시 무시됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    /// 문자열 기본 키
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// 로그인 이메일 (unique)
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

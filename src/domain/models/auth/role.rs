//! 사용자 역할
//!
//! 토큰의 `role` 클레임이 가리킬 수 있는 역할의 닫힌 집합입니다.
//! 새로운 역할을 추가하면 [`AuthResolver`](crate::services::auth::AuthResolver)의
//! 디스패치 `match`가 컴파일되지 않으므로 반드시 명시적인 처리가 필요합니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Auditor,
}

impl Role {
    /// 클레임 값에서 역할을 해석합니다.
    ///
    /// 정확히 `"manager"` 또는 `"auditor"`만 허용합니다.
    /// 대소문자 변형, 공백, 빈 문자열은 모두 `None`입니다.
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "manager" => Some(Role::Manager),
            "auditor" => Some(Role::Auditor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Auditor => "auditor",
        }
    }

    /// 사용자 메시지용 표기
    pub fn title(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Auditor => "Auditor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_claim_exact_match() {
        assert_eq!(Role::from_claim("manager"), Some(Role::Manager));
        assert_eq!(Role::from_claim("auditor"), Some(Role::Auditor));
    }

    #[test]
    fn test_role_from_claim_rejects_variants() {
        for value in ["Manager", "AUDITOR", "admin", "", " manager", "manager ", "counsellor"] {
            assert_eq!(Role::from_claim(value), None, "value: {:?}", value);
        }
    }

    #[test]
    fn test_role_serialization_matches_claim_value() {
        let json = serde_json::to_string(&Role::Auditor).unwrap();
        assert_eq!(json, "\"auditor\"");
        assert_eq!(Role::Manager.to_string(), "manager");
    }
}

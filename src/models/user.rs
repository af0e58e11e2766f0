use serde::{Deserialize, Serialize};

/// Roles the portal knows how to route. Anything else the backend sends is
/// kept as a raw `roleNameEn` string and never matches a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Teacher,
    Student,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Teacher => "teacher",
            RoleName::Student => "student",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(RoleName::Admin),
            "teacher" => Some(RoleName::Teacher),
            "student" => Some(RoleName::Student),
            _ => None,
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            RoleName::Admin => "/dashboard/admin",
            RoleName::Teacher => "/dashboard/teacher",
            RoleName::Student => "/dashboard/student",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_name_en: String,
    #[serde(default)]
    pub role_name_ru: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
}

/// Short user reference embedded in grades and disciplines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: i64,
    pub user_name: String,
}

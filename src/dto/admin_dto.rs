use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::discipline::Discipline;
use crate::models::group::Group;
use crate::models::user::{Role, User, UserRef};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub user_name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub role_name_en: String,
    #[serde(default)]
    pub group_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentPayload {
    pub user_name: String,
    pub role_name_en: String,
    pub group_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeePayload {
    pub user_name: String,
    pub role_name_en: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub group_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisciplineRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub discipline_name: String,
    #[serde(default)]
    pub teachers_ids: Vec<i64>,
    #[serde(default)]
    pub groups_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub user_name: String,
    pub users: Vec<User>,
    pub teachers: Vec<UserRef>,
    pub roles: Vec<Role>,
    pub groups: Vec<Group>,
    pub disciplines: Vec<Discipline>,
}

use serde::{Deserialize, Serialize};

use crate::models::group::Group;
use crate::models::user::UserRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub discipline_id: i64,
    pub discipline_name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub teachers: Vec<UserRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineRef {
    pub discipline_id: i64,
    pub discipline_name: String,
}

use serde::{Deserialize, Serialize};

use crate::models::user::UserRef;

/// One student's score on one survey, as listed on the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentGrade {
    pub student_grade_id: i64,
    pub student: UserRef,
    pub group_code: String,
    pub grade: i32,
}

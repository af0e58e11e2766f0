use serde::{Deserialize, Serialize};

use crate::models::discipline::DisciplineRef;
use crate::models::survey::SurveySummary;
use crate::models::user::RoleName;

/// A survey the student has finished, with the grade they got.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSurvey {
    pub survey_id: i64,
    #[serde(default)]
    pub survey_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_on_discipline: Option<DisciplineRef>,
    pub grade: i32,
}

/// Denormalized copy of the logged-in user's identity and related lists,
/// written on login and patched by the session store afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user_id: i64,
    pub user_name: String,
    pub role_name_en: String,
    #[serde(default)]
    pub available_surveys: Vec<SurveySummary>,
    #[serde(default)]
    pub student_grades: Vec<CompletedSurvey>,
    #[serde(default)]
    pub available_disciplines: Vec<DisciplineRef>,
}

impl SessionSnapshot {
    pub fn role(&self) -> Option<RoleName> {
        RoleName::parse(&self.role_name_en)
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.role_name_en == role.as_str()
    }

    pub fn completed(&self, survey_id: i64) -> Option<&CompletedSurvey> {
        self.student_grades.iter().find(|g| g.survey_id == survey_id)
    }

    pub fn available(&self, survey_id: i64) -> Option<&SurveySummary> {
        self.available_surveys.iter().find(|s| s.survey_id == survey_id)
    }

    pub fn discipline(&self, discipline_id: i64) -> Option<&DisciplineRef> {
        self.available_disciplines
            .iter()
            .find(|d| d.discipline_id == discipline_id)
    }
}

use serde::{Deserialize, Serialize};

use crate::models::discipline::DisciplineRef;
use crate::models::question::Question;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRef {
    pub teacher_id: i64,
    pub teacher_name: String,
}

/// Full survey with its questions, as returned by `GET /surveys/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub survey_id: i64,
    pub survey_name: String,
    pub survey_end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_created_by: Option<TeacherRef>,
    pub survey_on_discipline: DisciplineRef,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Survey listing entry kept in the session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub survey_id: i64,
    pub survey_name: String,
    pub survey_end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_created_by: Option<TeacherRef>,
    pub survey_on_discipline: DisciplineRef,
}

impl From<&Survey> for SurveySummary {
    fn from(s: &Survey) -> Self {
        Self {
            survey_id: s.survey_id,
            survey_name: s.survey_name.clone(),
            survey_end_date: s.survey_end_date.clone(),
            survey_created_date: s.survey_created_date.clone(),
            survey_created_by: s.survey_created_by.clone(),
            survey_on_discipline: s.survey_on_discipline.clone(),
        }
    }
}

use serde::Serialize;

use crate::models::discipline::DisciplineRef;
use crate::models::session::CompletedSurvey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyCard {
    pub id: i64,
    pub title: String,
    pub discipline: String,
    pub status: SurveyStatus,
    pub deadline: String,
    pub created_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDashboard {
    pub user_name: String,
    pub total_surveys: usize,
    pub active_count: usize,
    pub completed_count: usize,
    pub active: Vec<SurveyCard>,
    pub completed: Vec<SurveyCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub user_name: String,
    pub pending: Vec<SurveyCard>,
    pub completed: Vec<CompletedSurvey>,
    pub disciplines: Vec<DisciplineRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub title: &'static str,
    pub description: &'static str,
    pub login_path: &'static str,
}

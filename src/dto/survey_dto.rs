use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::dto::notice_dto::Notice;
use crate::models::discipline::DisciplineRef;
use crate::models::question::SingleChoiceQuestion;
use crate::models::student_grade::StudentGrade;
use crate::models::survey::Survey;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestionOption {
    #[serde(default)]
    pub option_text: String,
    #[serde(default)]
    pub is_answer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub question_points: i32,
    #[serde(default)]
    pub question_options: Vec<NewQuestionOption>,
}

/// Survey form submitted by a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub survey_name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub survey_end_date: String,
    #[serde(default)]
    pub discipline_id: Option<i64>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

/// Body of `POST /surveys`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyPayload {
    pub survey_name: String,
    pub survey_end_date: String,
    #[serde(rename = "surveyCreatedByTeacherID")]
    pub survey_created_by_teacher_id: i64,
    pub discipline_id: i64,
    pub questions: Vec<NewQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSurvey {
    pub survey_id: i64,
    pub survey_name: String,
    pub survey_end_date: String,
    #[serde(default)]
    pub survey_created_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyResponse {
    pub status: String,
    #[serde(default)]
    pub created_survey: Option<CreatedSurvey>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyResult {
    pub survey_id: i64,
    pub redirect_to: String,
    pub notice: Notice,
}

/// Selected option text per question id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyCompletionRequest {
    #[serde(default)]
    pub answers: HashMap<i64, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyCompletionResponse {
    pub survey_id: i64,
    pub grade: i32,
    pub max_grade: i32,
    pub correct_answers: usize,
    pub answered_questions: usize,
    pub session_updated: bool,
    pub notice: Notice,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStudentGradePayload {
    pub student_id: i64,
    pub survey_id: i64,
    pub grade: i32,
}

/// A question as the student sees it: options without the correct flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub question_id: i64,
    pub question_text: String,
    pub question_points: i32,
    pub options: Vec<String>,
}

impl From<&SingleChoiceQuestion> for QuestionView {
    fn from(q: &SingleChoiceQuestion) -> Self {
        Self {
            question_id: q.id(),
            question_text: q.text().to_string(),
            question_points: q.points(),
            options: q.options().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyForCompletion {
    pub survey_id: i64,
    pub survey_name: String,
    pub survey_end_date: String,
    pub survey_on_discipline: DisciplineRef,
    pub max_grade: i32,
    pub questions: Vec<QuestionView>,
}

impl SurveyForCompletion {
    pub fn new(survey: &Survey, questions: &[SingleChoiceQuestion]) -> Self {
        Self {
            survey_id: survey.survey_id,
            survey_name: survey.survey_name.clone(),
            survey_end_date: survey.survey_end_date.clone(),
            survey_on_discipline: survey.survey_on_discipline.clone(),
            max_grade: questions.iter().fold(0, |acc: i32, q| acc.saturating_add(q.points())),
            questions: questions.iter().map(QuestionView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    pub group: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResults {
    pub survey_id: i64,
    pub groups: Vec<String>,
    pub results: Vec<StudentGrade>,
    pub average_grade: f64,
    pub total_results: usize,
}

use crate::dto::survey_dto::{ResultsQuery, SaveStudentGradePayload, SurveyResults};
use crate::error::Result;
use crate::models::student_grade::StudentGrade;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct StudentGradeService {
    api: ApiClient,
}

impl StudentGradeService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn save(&self, student_id: i64, survey_id: i64, grade: i32) -> Result<serde_json::Value> {
        let payload = SaveStudentGradePayload {
            student_id,
            survey_id,
            grade,
        };
        self.api.post("/student-grades", &payload).await
    }

    pub async fn list_by_survey(&self, survey_id: i64) -> Result<Vec<StudentGrade>> {
        self.api
            .get(&format!("/student-grades/survey/{}", survey_id))
            .await
    }

    /// Filters results by group and student name and computes the average
    /// over what is left. `groups` always lists every group in `results`.
    pub fn summarize(survey_id: i64, results: Vec<StudentGrade>, query: &ResultsQuery) -> SurveyResults {
        let mut groups: Vec<String> = results.iter().map(|r| r.group_code.clone()).collect();
        groups.sort();
        groups.dedup();

        let group = query
            .group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty() && *g != "all");
        let search = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let filtered: Vec<StudentGrade> = results
            .into_iter()
            .filter(|r| group.map_or(true, |g| r.group_code == g))
            .filter(|r| r.student.user_name.to_lowercase().contains(&search))
            .collect();

        let average_grade = if filtered.is_empty() {
            0.0
        } else {
            let sum: i64 = filtered.iter().map(|r| r.grade as i64).sum();
            let avg = sum as f64 / filtered.len() as f64;
            (avg * 10.0).round() / 10.0
        };

        SurveyResults {
            survey_id,
            groups,
            total_results: filtered.len(),
            results: filtered,
            average_grade,
        }
    }
}

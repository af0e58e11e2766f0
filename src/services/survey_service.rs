use crate::dto::survey_dto::{CreateSurveyPayload, CreateSurveyResponse};
use crate::error::Result;
use crate::models::survey::Survey;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct SurveyService {
    api: ApiClient,
}

impl SurveyService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get(&self, survey_id: i64) -> Result<Survey> {
        self.api.get(&format!("/surveys/{}", survey_id)).await
    }

    pub async fn create(&self, payload: &CreateSurveyPayload) -> Result<CreateSurveyResponse> {
        self.api.post("/surveys", payload).await
    }
}

use crate::dto::admin_dto::CreateDisciplineRequest;
use crate::error::Result;
use crate::models::discipline::Discipline;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct DisciplineService {
    api: ApiClient,
}

impl DisciplineService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_detailed(&self) -> Result<Vec<Discipline>> {
        self.api.get("/disciplines/detailed").await
    }

    pub async fn create(&self, discipline: &CreateDisciplineRequest) -> Result<serde_json::Value> {
        self.api.post("/disciplines", discipline).await
    }
}

use crate::dto::admin_dto::CreateGroupRequest;
use crate::error::Result;
use crate::models::group::Group;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct GroupService {
    api: ApiClient,
}

impl GroupService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Group>> {
        self.api.get("/groups").await
    }

    pub async fn create(&self, group_code: &str) -> Result<serde_json::Value> {
        let payload = CreateGroupRequest {
            group_code: group_code.to_string(),
        };
        self.api.post("/groups", &payload).await
    }
}

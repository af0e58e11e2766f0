use crate::error::Result;
use crate::models::user::Role;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct RoleService {
    api: ApiClient,
}

impl RoleService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Role>> {
        self.api.get("/roles").await
    }
}

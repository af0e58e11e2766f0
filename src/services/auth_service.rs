use crate::dto::auth_dto::{BackendLoginResponse, Credentials};
use crate::error::Result;
use crate::models::session::SessionSnapshot;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<SessionSnapshot> {
        let response: BackendLoginResponse = self.api.post("/auth/login", credentials).await?;
        Ok(response.user_data)
    }

    pub async fn create_password(&self, credentials: &Credentials) -> Result<serde_json::Value> {
        self.api.post("/auth/password", credentials).await
    }
}

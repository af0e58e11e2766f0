use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::session::SessionSnapshot;

/// User name and password, used both for login and for first-time password
/// creation. Serialized as-is to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub user_name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendLoginResponse {
    pub user_data: SessionSnapshot,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub session_token: String,
    pub redirect_to: String,
    pub user_data: SessionSnapshot,
}

use crate::dto::admin_dto::{CreateEmployeePayload, CreateStudentPayload};
use crate::error::Result;
use crate::models::user::{User, UserRef};
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_detailed(&self) -> Result<Vec<User>> {
        self.api.get("/users/detailed").await
    }

    pub async fn list_teachers(&self) -> Result<Vec<UserRef>> {
        self.api.get("/users/teachers").await
    }

    pub async fn create_student(
        &self,
        user_name: &str,
        role_name_en: &str,
        group_code: &str,
    ) -> Result<serde_json::Value> {
        let payload = CreateStudentPayload {
            user_name: user_name.to_string(),
            role_name_en: role_name_en.to_string(),
            group_code: group_code.to_string(),
        };
        self.api.post("/users/student", &payload).await
    }

    pub async fn create_employee(
        &self,
        user_name: &str,
        role_name_en: &str,
    ) -> Result<serde_json::Value> {
        let payload = CreateEmployeePayload {
            user_name: user_name.to_string(),
            role_name_en: role_name_en.to_string(),
        };
        self.api.post("/users/employee", &payload).await
    }
}

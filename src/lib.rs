pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    api_client::ApiClient, auth_service::AuthService, discipline_service::DisciplineService,
    group_service::GroupService, role_service::RoleService, session_service::SessionStore,
    student_grade_service::StudentGradeService, survey_service::SurveyService,
    user_service::UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub group_service: GroupService,
    pub discipline_service: DisciplineService,
    pub role_service: RoleService,
    pub survey_service: SurveyService,
    pub student_grade_service: StudentGradeService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let api = ApiClient::new(config.api_url.clone())?;
        Ok(Self::with_api(api, SessionStore::new()))
    }

    pub fn with_api(api: ApiClient, sessions: SessionStore) -> Self {
        Self {
            sessions,
            auth_service: AuthService::new(api.clone()),
            user_service: UserService::new(api.clone()),
            group_service: GroupService::new(api.clone()),
            discipline_service: DisciplineService::new(api.clone()),
            role_service: RoleService::new(api.clone()),
            survey_service: SurveyService::new(api.clone()),
            student_grade_service: StudentGradeService::new(api),
        }
    }
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::dto::dashboard_dto::LandingPage;
use crate::middleware::auth::LOGIN_PATH;

#[axum::debug_handler]
pub async fn home() -> Json<LandingPage> {
    Json(LandingPage {
        title: "University Survey System",
        description: "Create, take and analyse surveys: teachers manage their surveys, students complete them.",
        login_path: LOGIN_PATH,
    })
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not_found" })))
}

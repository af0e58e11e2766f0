use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::dto::auth_dto::{Credentials, LoginResponse};
use crate::middleware::auth::{bearer_token, HOME_PATH};
use crate::utils::notice::{error_notice, precondition_notice, success_notice};
use crate::utils::validation::validate;
use crate::AppState;

const LOGIN_ERRORS: [(u16, &str); 2] = [
    (401, "Invalid username or password"),
    (412, "Password has not been created for this user"),
];

const PASSWORD_ERRORS: [(u16, &str); 2] = [
    (404, "User not found"),
    (409, "Password has already been created for this user"),
];

#[axum::debug_handler]
pub async fn login(State(state): State<AppState>, Json(req): Json<Credentials>) -> Response {
    if validate(&req).is_err() {
        return precondition_notice("All fields are required");
    }

    match state.auth_service.login(&req).await {
        Ok(snapshot) => {
            let redirect_to = snapshot
                .role()
                .map(|r| r.dashboard_path())
                .unwrap_or(HOME_PATH)
                .to_string();
            let session_token = state.sessions.create(snapshot.clone()).await;
            tracing::info!(
                user_id = snapshot.user_id,
                "User {} logged in as {}",
                snapshot.user_name,
                snapshot.role_name_en
            );
            Json(LoginResponse {
                session_token,
                redirect_to,
                user_data: snapshot,
            })
            .into_response()
        }
        Err(e) => error_notice(e, &LOGIN_ERRORS, "Login failed"),
    }
}

#[axum::debug_handler]
pub async fn create_password(State(state): State<AppState>, Json(req): Json<Credentials>) -> Response {
    if validate(&req).is_err() {
        return precondition_notice("All fields are required");
    }

    match state.auth_service.create_password(&req).await {
        Ok(_) => {
            tracing::info!("Password created for {}", req.user_name);
            success_notice(StatusCode::CREATED, "Password created successfully")
        }
        Err(e) => error_notice(e, &PASSWORD_ERRORS, "Failed to create password"),
    }
}

#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        if state.sessions.remove(token).await {
            tracing::info!("Session closed");
        }
    }
    StatusCode::NO_CONTENT
}

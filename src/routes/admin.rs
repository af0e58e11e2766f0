use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};

use crate::dto::admin_dto::{
    AdminDashboard, CreateDisciplineRequest, CreateGroupRequest, CreateUserRequest,
};
use crate::error::Result;
use crate::middleware::auth::CurrentSession;
use crate::models::user::RoleName;
use crate::utils::notice::{error_notice, precondition_notice, success_notice};
use crate::utils::validation::validate;
use crate::AppState;

async fn load_dashboard(state: &AppState, user_name: String) -> Result<AdminDashboard> {
    Ok(AdminDashboard {
        user_name,
        users: state.user_service.list_detailed().await?,
        teachers: state.user_service.list_teachers().await?,
        roles: state.role_service.list().await?,
        groups: state.group_service.list().await?,
        disciplines: state.discipline_service.list_detailed().await?,
    })
}

#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Response {
    match load_dashboard(&state, session.snapshot.user_name).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => error_notice(e, &[], "Failed to load data"),
    }
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    if validate(&req).is_err() {
        return precondition_notice("All fields are required");
    }

    let result = if req.role_name_en == RoleName::Student.as_str() {
        let Some(group_code) = req.group_code.as_deref().filter(|g| !g.trim().is_empty()) else {
            return precondition_notice("A group is required for students");
        };
        state
            .user_service
            .create_student(&req.user_name, &req.role_name_en, group_code)
            .await
    } else {
        state
            .user_service
            .create_employee(&req.user_name, &req.role_name_en)
            .await
    };

    match result {
        Ok(_) => {
            tracing::info!("Created user {} with role {}", req.user_name, req.role_name_en);
            success_notice(StatusCode::CREATED, "User created successfully")
        }
        Err(e) => error_notice(e, &[], "Failed to create user"),
    }
}

#[axum::debug_handler]
pub async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Response {
    if validate(&req).is_err() {
        return precondition_notice("Group code is required");
    }

    match state.group_service.create(req.group_code.trim()).await {
        Ok(_) => {
            tracing::info!("Created group {}", req.group_code);
            success_notice(StatusCode::CREATED, "Group created successfully")
        }
        Err(e) => error_notice(e, &[], "Failed to create group"),
    }
}

#[axum::debug_handler]
pub async fn create_discipline(
    State(state): State<AppState>,
    Json(req): Json<CreateDisciplineRequest>,
) -> Response {
    if validate(&req).is_err() {
        return precondition_notice("Discipline name is required");
    }

    match state.discipline_service.create(&req).await {
        Ok(_) => {
            tracing::info!(
                teachers = req.teachers_ids.len(),
                groups = req.groups_codes.len(),
                "Created discipline {}",
                req.discipline_name
            );
            success_notice(StatusCode::CREATED, "Discipline created successfully")
        }
        Err(e) => error_notice(e, &[], "Failed to create discipline"),
    }
}

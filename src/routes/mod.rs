pub mod admin;
pub mod auth;
pub mod health;
pub mod pages;
pub mod student;
pub mod teacher;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::{require_admin, require_student, require_teacher};
use crate::AppState;

pub fn app_router(state: AppState) -> Router {
    let admin_pages = Router::new()
        .route("/dashboard/admin", get(admin::dashboard))
        .route("/dashboard/admin/users", post(admin::create_user))
        .route("/dashboard/admin/groups", post(admin::create_group))
        .route("/dashboard/admin/disciplines", post(admin::create_discipline))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    let teacher_pages = Router::new()
        .route("/dashboard/teacher", get(teacher::dashboard))
        .route("/dashboard/teacher/surveys", post(teacher::create_survey))
        .route(
            "/dashboard/teacher/surveys/:id/results",
            get(teacher::survey_results),
        )
        .route_layer(from_fn_with_state(state.clone(), require_teacher));

    let student_pages = Router::new()
        .route("/dashboard/student", get(student::dashboard))
        .route("/dashboard/student/surveys/:id", get(student::get_survey))
        .route(
            "/dashboard/student/surveys/:id/completion",
            post(student::complete_survey),
        )
        .route_layer(from_fn_with_state(state.clone(), require_student));

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(pages::home))
        .route("/login", post(auth::login))
        .route("/password", post(auth::create_password))
        .route("/logout", post(auth::logout))
        .merge(admin_pages)
        .merge(teacher_pages)
        .merge(student_pages)
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::models::session::SessionSnapshot;
use crate::models::user::RoleName;
use crate::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Session resolved by the role guard, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: String,
    pub snapshot: SessionSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectLogin,
    RedirectHome,
}

pub fn check_access(snapshot: Option<&SessionSnapshot>, required: RoleName) -> Access {
    match snapshot {
        None => Access::RedirectLogin,
        Some(s) if s.has_role(required) => Access::Allow,
        Some(_) => Access::RedirectHome,
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

async fn require_role(state: AppState, mut req: Request, next: Next, required: RoleName) -> Response {
    let token = bearer_token(req.headers()).map(str::to_string);
    let snapshot = match &token {
        Some(token) => state.sessions.get(token).await,
        None => None,
    };

    match (check_access(snapshot.as_ref(), required), token, snapshot) {
        (Access::Allow, Some(token), Some(snapshot)) => {
            req.extensions_mut().insert(CurrentSession { token, snapshot });
            next.run(req).await
        }
        (Access::RedirectHome, _, _) => {
            tracing::info!(
                "Role {} required for {}, redirecting home",
                required.as_str(),
                req.uri().path()
            );
            Redirect::to(HOME_PATH).into_response()
        }
        _ => Redirect::to(LOGIN_PATH).into_response(),
    }
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(state, req, next, RoleName::Admin).await
}

pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(state, req, next, RoleName::Teacher).await
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(state, req, next, RoleName::Student).await
}

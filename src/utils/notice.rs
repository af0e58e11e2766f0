use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::dto::notice_dto::{Notice, NoticeResponse};
use crate::error::Error;

/// Picks the user-facing text for a failed action. An upstream status listed
/// in `by_status` shows the server's message verbatim when it sent one and
/// the paired default otherwise; everything else shows `fallback`.
pub fn error_text(err: &Error, by_status: &[(u16, &str)], fallback: &str) -> String {
    if let Some((status, message)) = err.api_status() {
        if let Some((_, default)) = by_status.iter().find(|(s, _)| *s == status) {
            return message.unwrap_or(*default).to_string();
        }
    }
    fallback.to_string()
}

/// Logs the failure and renders it as an error notice with the error's status.
pub fn error_notice(err: Error, by_status: &[(u16, &str)], fallback: &str) -> Response {
    tracing::warn!("Action failed: {}", err);
    let status = err.status_code();
    let notice = Notice::error(error_text(&err, by_status, fallback));
    (status, Json(NoticeResponse { notice })).into_response()
}

/// Rejects a request before anything is sent upstream.
pub fn precondition_notice(text: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(NoticeResponse {
            notice: Notice::error(text),
        }),
    )
        .into_response()
}

pub fn success_notice(status: StatusCode, text: &str) -> Response {
    (
        status,
        Json(NoticeResponse {
            notice: Notice::success(text),
        }),
    )
        .into_response()
}

// Maps core errors onto the JSON error bodies the relay returns.
//
// Every error body carries an `error` message. Upstream failures also carry
// Google's status and response so callers can see why Google refused.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::core::documents::DocsError;

impl DocsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DocsError::Unauthorized => StatusCode::UNAUTHORIZED,
            DocsError::InvalidJson | DocsError::InvalidField(_) => StatusCode::BAD_REQUEST,
            DocsError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            DocsError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            DocsError::Upstream {
                status: google_status,
                body,
            } => json!({
                "error": "Google Docs API request failed.",
                "googleStatus": google_status,
                "googleResponse": body,
            }),
            DocsError::Transport(details) => json!({
                "error": "Failed to reach Google Docs API.",
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

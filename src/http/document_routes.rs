// Axum routes for the Google Docs relay.
//
// Handlers stay thin: pull the Authorization header and raw body out of the
// request, validate them with the core helpers, call the service and shape
// the JSON reply. The body is taken as bytes so malformed JSON gets our own
// error message instead of axum's rejection text.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::documents::{
    parse_payload, validate_authorization, AppendTextRequest, DocsApi, DocsError,
    DocumentService, GetDocumentTextRequest,
};

pub const APPEND_TEXT_PATH: &str = "/api/service-providers/google-docs/append-text";
pub const GET_DOCUMENT_TEXT_PATH: &str = "/api/service-providers/google-docs/get-document-text";

pub fn router<A: DocsApi + 'static>(service: Arc<DocumentService<A>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(APPEND_TEXT_PATH, post(append_text::<A>))
        .route(GET_DOCUMENT_TEXT_PATH, post(get_document_text::<A>))
        .with_state(service)
}

// ============================================================================
// Response types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendTextResponse {
    success: bool,
    message: &'static str,
    /// Google's `batchUpdate` reply, passed through untouched.
    google_response: Value,
}

#[derive(Serialize)]
struct DocumentTextResponse {
    success: bool,
    document_title: String,
    text_content: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> &'static str {
    "OK"
}

/// A header that isn't valid UTF-8 counts as missing.
fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
}

/// POST append-text - insert `text` at the end of document `documentId`
async fn append_text<A: DocsApi>(
    State(service): State<Arc<DocumentService<A>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AppendTextResponse>, DocsError> {
    let authorization = validate_authorization(authorization_header(&headers))?;
    let payload = parse_payload(&body)?;
    let request = AppendTextRequest::from_payload(&payload)?;

    let google_response = service.append_text(authorization, &request).await?;

    Ok(Json(AppendTextResponse {
        success: true,
        message: "Text appended to Google Document.",
        google_response,
    }))
}

/// POST get-document-text - read document `documentId` as plain text
async fn get_document_text<A: DocsApi>(
    State(service): State<Arc<DocumentService<A>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DocumentTextResponse>, DocsError> {
    let authorization = validate_authorization(authorization_header(&headers))?;
    let payload = parse_payload(&body)?;
    let request = GetDocumentTextRequest::from_payload(&payload)?;

    let document = service.get_document_text(authorization, &request).await?;

    Ok(Json(DocumentTextResponse {
        success: true,
        document_title: document.title,
        text_content: document.text,
    }))
}

// Business logic for relaying document requests to Google Docs.
//
// This module has no axum or reqwest imports. It talks to Google through the
// `DocsApi` port and returns plain domain values, so the HTTP layer only has
// to translate them into responses.

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

use super::document_flattener::flatten;
use super::document_model::Document;
use super::request_validator::{AppendTextRequest, GetDocumentTextRequest};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Missing or invalid Authorization header. Use Bearer token from Google OAuth.")]
    Unauthorized,

    #[error("Request body must be valid JSON.")]
    InvalidJson,

    #[error("Invalid '{0}'. It must be a non-empty string.")]
    InvalidField(&'static str),

    /// Google answered with a non-2xx status. `body` is the parsed response,
    /// or `{"raw": ...}` when it wasn't JSON.
    #[error("Google Docs API request failed.")]
    Upstream { status: u16, body: Value },

    #[error("Failed to reach Google Docs API: {0}")]
    Transport(String),
}

// ============================================================================
// DOCS API PORT
// ============================================================================

/// What Google sent back: the status code and the body as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound calls to the Google Docs REST API.
///
/// `authorization` is the caller's full header value (`Bearer ...`); the relay
/// never mints or refreshes tokens itself.
#[async_trait]
pub trait DocsApi: Send + Sync {
    /// `POST /v1/documents/{id}:batchUpdate`
    async fn batch_update(
        &self,
        authorization: &str,
        document_id: &str,
        requests: Value,
    ) -> Result<ApiResponse, DocsError>;

    /// `GET /v1/documents/{id}`
    async fn get_document(
        &self,
        authorization: &str,
        document_id: &str,
    ) -> Result<ApiResponse, DocsError>;
}

// ============================================================================
// SERVICE
// ============================================================================

/// A document read as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    pub title: String,
    /// Flattened body with surrounding whitespace trimmed.
    pub text: String,
}

pub struct DocumentService<A: DocsApi> {
    api: A,
}

impl<A: DocsApi> DocumentService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Inserts `request.text` at the end of the document body and returns
    /// Google's `batchUpdate` reply.
    pub async fn append_text(
        &self,
        authorization: &str,
        request: &AppendTextRequest,
    ) -> Result<Value, DocsError> {
        let requests = insert_text_requests(&request.text);
        let response = self
            .api
            .batch_update(authorization, &request.document_id, requests)
            .await?;
        let body = ensure_success(response, &request.document_id)?;

        tracing::info!(
            document_id = %request.document_id,
            chars = request.text.chars().count(),
            "Appended text to Google Doc"
        );
        Ok(body)
    }

    /// Fetches the document and flattens its body.
    pub async fn get_document_text(
        &self,
        authorization: &str,
        request: &GetDocumentTextRequest,
    ) -> Result<DocumentText, DocsError> {
        let response = self
            .api
            .get_document(authorization, &request.document_id)
            .await?;
        let body = ensure_success(response, &request.document_id)?;

        let document = Document::from_value(&body);
        let text = flatten(&document.body).trim().to_string();

        tracing::info!(
            document_id = %request.document_id,
            chars = text.len(),
            "Fetched Google Doc '{}'",
            document.title
        );

        Ok(DocumentText {
            title: document.title,
            text,
        })
    }
}

/// A single `insertText` request targeting the end of the body segment.
fn insert_text_requests(text: &str) -> Value {
    json!({
        "requests": [
            {
                "insertText": {
                    "endOfSegmentLocation": {},
                    "text": text,
                }
            }
        ]
    })
}

fn ensure_success(response: ApiResponse, document_id: &str) -> Result<Value, DocsError> {
    if response.is_success() {
        return Ok(response.body);
    }

    tracing::warn!(
        document_id = %document_id,
        status = response.status,
        "Google Docs API request failed"
    );
    Err(DocsError::Upstream {
        status: response.status,
        body: response.body,
    })
}

// =============================================================================
// GOOGLE DOCS REST CLIENT
// =============================================================================
//
// Implements the core `DocsApi` port over reqwest.
//
// **Authentication:**
// The relay never holds its own credentials. Every call forwards the caller's
// `Authorization` header verbatim, so the caller's OAuth token decides which
// documents are reachable.
//
// **Endpoints used:**
// - `POST /v1/documents/{documentId}:batchUpdate` - append text
// - `GET  /v1/documents/{documentId}` - read document structure
//
// Response bodies are returned whatever the status. A body that isn't JSON
// (HTML error pages from a proxy, for example) is wrapped as `{"raw": "..."}`.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::documents::{ApiResponse, DocsApi, DocsError};

/// Client for the Google Docs REST API.
pub struct GoogleDocsClient {
    client: Client,
    base_url: String,
}

impl GoogleDocsClient {
    /// Creates a client against `base_url` (no trailing slash) with a
    /// per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DocsError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("docs-relay/0.1")
            .build()
            .map_err(|e| DocsError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL of a document resource. The id is encoded as a single path segment.
    fn document_url(&self, document_id: &str) -> String {
        format!(
            "{}/v1/documents/{}",
            self.base_url,
            urlencoding::encode(document_id)
        )
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, DocsError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Google Docs API request could not be sent: {}", e);
            DocsError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DocsError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: parse_body(&text),
        })
    }
}

/// Parses a response body as JSON, falling back to `{"raw": text}`.
fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

#[async_trait]
impl DocsApi for GoogleDocsClient {
    async fn batch_update(
        &self,
        authorization: &str,
        document_id: &str,
        requests: Value,
    ) -> Result<ApiResponse, DocsError> {
        let url = format!("{}:batchUpdate", self.document_url(document_id));
        tracing::debug!("Sending batchUpdate to Google Docs: {}", url);

        let request = self
            .client
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json")
            .json(&requests);

        self.send(request).await
    }

    async fn get_document(
        &self,
        authorization: &str,
        document_id: &str,
    ) -> Result<ApiResponse, DocsError> {
        let url = self.document_url(document_id);
        tracing::debug!("Fetching Google Doc via API: {}", url);

        let request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json");

        self.send(request).await
    }
}

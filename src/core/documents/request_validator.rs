// Validation of inbound relay requests.
//
// Works on plain strings and bytes so the HTTP layer only has to pull the
// header and body out of the request.

use serde_json::Value;

use super::DocsError;

/// Request to append text at the end of a document's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendTextRequest {
    pub document_id: String,
    pub text: String,
}

/// Request to read a document as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDocumentTextRequest {
    pub document_id: String,
}

/// Checks for a `Bearer` credential and returns the header value unchanged,
/// since it is forwarded to Google as-is.
pub fn validate_authorization(header: Option<&str>) -> Result<&str, DocsError> {
    match header {
        Some(value)
            if value
                .get(..7)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("bearer ")) =>
        {
            Ok(value)
        }
        _ => Err(DocsError::Unauthorized),
    }
}

/// Parses the request body as JSON.
pub fn parse_payload(body: &[u8]) -> Result<Value, DocsError> {
    serde_json::from_slice(body).map_err(|_| DocsError::InvalidJson)
}

fn required_string(payload: &Value, field: &'static str) -> Result<String, DocsError> {
    match payload.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DocsError::InvalidField(field)),
    }
}

impl AppendTextRequest {
    /// `text` is checked before `documentId`.
    pub fn from_payload(payload: &Value) -> Result<Self, DocsError> {
        let text = required_string(payload, "text")?;
        let document_id = required_string(payload, "documentId")?;
        Ok(Self { document_id, text })
    }
}

impl GetDocumentTextRequest {
    pub fn from_payload(payload: &Value) -> Result<Self, DocsError> {
        Ok(Self {
            document_id: required_string(payload, "documentId")?,
        })
    }
}

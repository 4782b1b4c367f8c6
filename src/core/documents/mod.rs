// Document relay domain: the body tree model, the flattener, request
// validation and the service that ties them to the Docs API port.

pub mod document_flattener;
pub mod document_model;
pub mod document_service;
pub mod request_validator;

#[allow(unused_imports)]
pub use document_flattener::{flatten, flatten_value};
#[allow(unused_imports)]
pub use document_service::{ApiResponse, DocsApi, DocsError, DocumentService, DocumentText};
pub use request_validator::{
    parse_payload, validate_authorization, AppendTextRequest, GetDocumentTextRequest,
};

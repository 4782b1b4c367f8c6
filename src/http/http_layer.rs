// HTTP layer - axum routes and the mapping from core errors to responses.

#[path = "document_routes.rs"]
pub mod routes;

#[path = "error_response.rs"]
mod error_response;

pub use routes::router;

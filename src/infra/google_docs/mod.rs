// =============================================================================
// GOOGLE DOCS MODULE
// =============================================================================
//
// Outbound side of the relay. This lives in the infra layer because it does
// the HTTP I/O; the core only sees `ApiResponse` values through `DocsApi`.

pub mod google_docs_client;

pub use google_docs_client::GoogleDocsClient;

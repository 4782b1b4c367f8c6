// This is the entry point of the Google Docs relay.
//
// **Architecture Overview:**
// - `core/` = Business logic (document model, flattener, validation, service)
// - `infra/` = Implementations of core traits (the Google Docs REST client)
// - `http/` = HTTP-specific adapters (axum routes, error responses)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Build the router and serve it

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "http/http_layer.rs"]
mod http;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::core::config::ServerConfig;
use crate::core::documents::DocumentService;
use crate::infra::google_docs::GoogleDocsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env().context("Invalid relay configuration")?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let docs_client = GoogleDocsClient::new(config.api_base_url.clone(), config.timeout)
        .context("Failed to create Google Docs API client")?;
    let document_service = Arc::new(DocumentService::new(docs_client));

    let app = http::router(document_service);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!(
        "Docs relay listening on {} (upstream {})",
        config.bind,
        config.api_base_url
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "config/server_config.rs"]
pub mod config;

#[path = "documents/mod.rs"]
pub mod documents;

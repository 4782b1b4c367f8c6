// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "google_docs/mod.rs"]
pub mod google_docs;

// src/lib.rs
// Public library surface for the binary, integration tests and the demo.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod recommend;
pub mod resource;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::catalog::{CatalogError, InMemoryCatalog, ResourceCatalog, ResourceStore};
pub use crate::config::AppConfig;
pub use crate::recommend::{
    recommend_for_idea_category, recommend_for_node_category, search_resources, Recommender,
    SearchFilters,
};
pub use crate::resource::{Resource, ResourceType, ScoredResource};

/// Build the HTTP app from environment configuration (no metrics exporter).
/// The binary and the HTTP tests share this path.
pub async fn app() -> anyhow::Result<axum::Router> {
    let config = AppConfig::from_env()?;
    let state = AppState::from_config(config)?;
    Ok(router(state))
}

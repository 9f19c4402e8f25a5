//! Resource Recommender — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and the metrics exporter.

use resource_recommender::{api, metrics::Metrics, telemetry, AppConfig, AppState};
use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    telemetry::init_tracing();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(config)?;
    let metrics = Metrics::init()?;

    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}

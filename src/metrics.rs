use anyhow::anyhow;
use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow!("prometheus: install recorder: {e}"))?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "recommend_requests_total",
            "Recommendation calls by mode (idea|node|search)."
        );
        describe_counter!(
            "recommend_results_total",
            "Scored resources returned, by mode."
        );
        describe_counter!(
            "recommend_catalog_errors_total",
            "Catalog reads that failed and degraded to an empty result."
        );
        describe_histogram!(
            "recommend_score_ms",
            "Time spent reading the catalog and scoring, in milliseconds."
        );
        describe_counter!(
            "catalog_mutations_total",
            "Admin create/update/delete operations applied to the catalog."
        );
    });
}

//! Catalog-backed recommender. Catalog faults never reach the caller: they are
//! logged, counted and turned into an empty list.

use super::{
    recommend_for_idea_category, recommend_for_node_category, search_resources, SearchFilters,
};
use crate::catalog::{CatalogError, ResourceCatalog};
use crate::resource::ScoredResource;
use crate::telemetry::anon_hash;
use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendMode {
    Idea,
    Node,
    Search,
}

impl RecommendMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendMode::Idea => "idea",
            RecommendMode::Node => "node",
            RecommendMode::Search => "search",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "idea" => Some(RecommendMode::Idea),
            "node" => Some(RecommendMode::Node),
            "search" => Some(RecommendMode::Search),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<dyn ResourceCatalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self { catalog }
    }

    /// Top `max_results` resources for an idea category.
    pub async fn recommend_for_idea(
        &self,
        idea_category: &str,
        language: &str,
        max_results: usize,
    ) -> Vec<ScoredResource> {
        let started = Instant::now();
        let out = match self.catalog.all_resources(language).await {
            Ok(resources) => recommend_for_idea_category(&resources, idea_category, max_results),
            Err(e) => return self.degrade(RecommendMode::Idea, e),
        };
        debug!(
            target: "recommend",
            mode = "idea",
            %idea_category,
            %language,
            returned = out.len(),
            "recommendations scored"
        );
        self.record(RecommendMode::Idea, started, out.len());
        out
    }

    /// Every resource filed under a path node's category.
    pub async fn recommend_for_node(
        &self,
        node_category: &str,
        language: &str,
    ) -> Vec<ScoredResource> {
        let started = Instant::now();
        let out = match self
            .catalog
            .resources_by_category(node_category, language)
            .await
        {
            Ok(resources) => recommend_for_node_category(resources, node_category),
            Err(e) => return self.degrade(RecommendMode::Node, e),
        };
        debug!(
            target: "recommend",
            mode = "node",
            %node_category,
            %language,
            returned = out.len(),
            "recommendations scored"
        );
        self.record(RecommendMode::Node, started, out.len());
        out
    }

    /// Free-text search with optional filters.
    pub async fn search(
        &self,
        query: &str,
        language: &str,
        filters: &SearchFilters,
    ) -> Vec<ScoredResource> {
        let started = Instant::now();
        let out = match self.catalog.all_resources(language).await {
            Ok(resources) => search_resources(&resources, query, filters),
            Err(e) => return self.degrade(RecommendMode::Search, e),
        };
        // Never log raw query text.
        debug!(
            target: "recommend",
            mode = "search",
            query_id = %anon_hash(query),
            %language,
            returned = out.len(),
            "search scored"
        );
        self.record(RecommendMode::Search, started, out.len());
        out
    }

    fn record(&self, mode: RecommendMode, started: Instant, returned: usize) {
        let m = mode.as_str();
        counter!("recommend_requests_total", "mode" => m).increment(1);
        counter!("recommend_results_total", "mode" => m).increment(returned as u64);
        histogram!("recommend_score_ms").record(started.elapsed().as_secs_f64() * 1000.0);
    }

    fn degrade(&self, mode: RecommendMode, e: CatalogError) -> Vec<ScoredResource> {
        let m = mode.as_str();
        error!(
            target: "recommend",
            mode = m,
            catalog = self.catalog.name(),
            error = %e,
            "catalog read failed, returning no recommendations"
        );
        counter!("recommend_requests_total", "mode" => m).increment(1);
        counter!("recommend_catalog_errors_total", "mode" => m).increment(1);
        Vec::new()
    }
}

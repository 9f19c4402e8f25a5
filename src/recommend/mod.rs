// src/recommend/mod.rs
//! Recommendation entry points: idea-category ranking, path-node listing and
//! free-text search over a catalog snapshot.
//!
//! All three are pure functions of their inputs. Catalog access and failure
//! handling live in [`service`].

pub mod mapping;
pub mod scoring;
pub mod service;

use crate::resource::{Resource, ResourceType, ScoredResource};
use serde::Serialize;

pub use crate::recommend::mapping::{category_match, reason_for_category, type_weight};
pub use crate::recommend::scoring::{idea_score, search_score};
pub use crate::recommend::service::Recommender;

pub const SEARCH_REASON: &str = "Matches your search criteria";

/// Optional exact-match predicates for search. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
    pub featured: Option<bool>,
}

impl SearchFilters {
    pub fn matches(&self, r: &Resource) -> bool {
        self.category.as_deref().is_none_or(|c| r.category == c)
            && self.resource_type.is_none_or(|t| r.resource_type == t)
            && self.featured.is_none_or(|f| r.is_featured == f)
    }
}

/// Rank `resources` for a business idea of `idea_category`.
///
/// Featured resources always come first; inside each group the score decides.
/// Equal keys keep catalog order.
pub fn recommend_for_idea_category(
    resources: &[Resource],
    idea_category: &str,
    max_results: usize,
) -> Vec<ScoredResource> {
    let mut scored: Vec<ScoredResource> = resources
        .iter()
        .map(|r| {
            ScoredResource::new(
                r.clone(),
                idea_score(r, idea_category),
                reason_for_category(&r.category),
            )
        })
        .collect();

    scored.sort_by(|a, b| {
        b.resource
            .is_featured
            .cmp(&a.resource.is_featured)
            .then_with(|| b.relevance_score.cmp(&a.relevance_score))
    });
    scored.truncate(max_results);
    scored
}

/// Annotate a category-filtered catalog slice for a path node.
/// Order and membership are the caller's.
pub fn recommend_for_node_category<I>(resources: I, node_category: &str) -> Vec<ScoredResource>
where
    I: IntoIterator<Item = Resource>,
{
    let reason = format!("Essential resources for {node_category}");
    resources
        .into_iter()
        .map(|r| ScoredResource::new(r, scoring::NODE_SCORE, reason.clone()))
        .collect()
}

/// Case-insensitive substring search over title and description, narrowed by
/// `filters`, sorted by search score (highest first).
pub fn search_resources(
    resources: &[Resource],
    query: &str,
    filters: &SearchFilters,
) -> Vec<ScoredResource> {
    let q = scoring::prepare_query(query);
    let q = q.as_deref();

    let mut scored: Vec<ScoredResource> = resources
        .iter()
        .filter(|r| {
            let text_ok = match q {
                None => true,
                Some(q) => scoring::title_hit(r, q) || scoring::description_hit(r, q),
            };
            text_ok && filters.matches(r)
        })
        .map(|r| ScoredResource::new(r.clone(), search_score(r, q), SEARCH_REASON))
        .collect();

    scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    scored
}

//! Per-resource scoring for idea mode and search mode.
//!
//! The two scales are independent: an idea score of 5 and a search score of 5
//! say nothing about each other.

use super::mapping::{category_match, type_weight};
use crate::resource::Resource;

pub const BASE_SCORE: u32 = 1;
pub const CATEGORY_MATCH_WEIGHT: u32 = 3;
pub const FEATURED_BONUS: u32 = 2;

pub const NODE_SCORE: u32 = 5;

pub const SEARCH_TITLE_HIT: u32 = 3;
pub const SEARCH_DESCRIPTION_HIT: u32 = 2;
pub const SEARCH_FEATURED_BONUS: u32 = 1;
pub const SEARCH_EMPTY_QUERY_SCORE: u32 = 1;

/// `1 + 3·categoryMatch + typeWeight + 2·featured`
pub fn idea_score(resource: &Resource, idea_category: &str) -> u32 {
    let featured = if resource.is_featured { FEATURED_BONUS } else { 0 };
    BASE_SCORE
        + CATEGORY_MATCH_WEIGHT * category_match(&resource.category, idea_category)
        + type_weight(resource.resource_type)
        + featured
}

/// Lower-cased query; `None` for an empty query.
pub(crate) fn prepare_query(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

pub(crate) fn title_hit(resource: &Resource, query_lower: &str) -> bool {
    resource.title.to_lowercase().contains(query_lower)
}

pub(crate) fn description_hit(resource: &Resource, query_lower: &str) -> bool {
    resource
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(query_lower))
}

/// Search score; `query_lower` must come from [`prepare_query`].
pub fn search_score(resource: &Resource, query_lower: Option<&str>) -> u32 {
    let Some(q) = query_lower else {
        return SEARCH_EMPTY_QUERY_SCORE;
    };

    let mut score = 0;
    if title_hit(resource, q) {
        score += SEARCH_TITLE_HIT;
    }
    if description_hit(resource, q) {
        score += SEARCH_DESCRIPTION_HIT;
    }
    if resource.is_featured {
        score += SEARCH_FEATURED_BONUS;
    }
    score
}

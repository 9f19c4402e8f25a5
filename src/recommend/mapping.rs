//! Static lookup tables behind idea-category scoring.
//!
//! Idea categories are free text typed by users; resource categories are the
//! five business-function labels the catalog files resources under.
//! Both sides are compared case-insensitively after trimming.

use crate::resource::ResourceType;

pub const FOUNDATION: &str = "Foundation";
pub const PRODUCT_DEVELOPMENT: &str = "Product Development";
pub const MARKETING_AND_SALES: &str = "Marketing & Sales";
pub const OPERATIONS: &str = "Operations";
pub const FINANCE: &str = "Finance";

/// One row of the idea-category table.
#[derive(Debug, Clone, Copy)]
pub struct IdeaCategoryMapping {
    pub idea_category: &'static str,
    pub resource_categories: &'static [&'static str],
}

pub const IDEA_CATEGORY_MAP: &[IdeaCategoryMapping] = &[
    IdeaCategoryMapping {
        idea_category: "technology",
        resource_categories: &[PRODUCT_DEVELOPMENT, MARKETING_AND_SALES, OPERATIONS],
    },
    IdeaCategoryMapping {
        idea_category: "agriculture",
        resource_categories: &[FOUNDATION, OPERATIONS, FINANCE],
    },
    IdeaCategoryMapping {
        idea_category: "healthcare",
        resource_categories: &[FOUNDATION, PRODUCT_DEVELOPMENT, OPERATIONS],
    },
    IdeaCategoryMapping {
        idea_category: "education",
        resource_categories: &[FOUNDATION, PRODUCT_DEVELOPMENT, MARKETING_AND_SALES],
    },
    IdeaCategoryMapping {
        idea_category: "manufacturing",
        resource_categories: &[FOUNDATION, OPERATIONS, FINANCE],
    },
    IdeaCategoryMapping {
        idea_category: "retail",
        resource_categories: &[MARKETING_AND_SALES, OPERATIONS, FINANCE],
    },
    IdeaCategoryMapping {
        idea_category: "finance",
        resource_categories: &[FOUNDATION, FINANCE, OPERATIONS],
    },
    IdeaCategoryMapping {
        idea_category: "consulting",
        resource_categories: &[FOUNDATION, MARKETING_AND_SALES, OPERATIONS],
    },
];

/// Per-category explanation attached in idea mode.
pub const CATEGORY_REASONS: &[(&str, &str)] = &[
    (FOUNDATION, "Essential for setting up your business structure"),
    (PRODUCT_DEVELOPMENT, "Key for developing your product or service"),
    (MARKETING_AND_SALES, "Critical for reaching your target market"),
    (OPERATIONS, "Important for managing day-to-day operations"),
    (FINANCE, "Essential for financial planning and funding"),
];

pub const GENERIC_REASON: &str = "Recommended based on your idea category";

/// Resource categories relevant to an idea category; empty when unknown.
pub fn mapped_categories(idea_category: &str) -> &'static [&'static str] {
    let key = idea_category.trim();
    IDEA_CATEGORY_MAP
        .iter()
        .find(|m| m.idea_category.eq_ignore_ascii_case(key))
        .map(|m| m.resource_categories)
        .unwrap_or(&[])
}

/// 1 when `resource_category` is listed for `idea_category`, else 0.
pub fn category_match(resource_category: &str, idea_category: &str) -> u32 {
    let rc = resource_category.trim();
    let hit = mapped_categories(idea_category)
        .iter()
        .any(|c| c.eq_ignore_ascii_case(rc));
    u32::from(hit)
}

pub fn type_weight(t: ResourceType) -> u32 {
    match t {
        ResourceType::Course => 3,
        ResourceType::Book => 2,
        ResourceType::Article | ResourceType::Tool => 1,
    }
}

pub fn reason_for_category(resource_category: &str) -> &'static str {
    let rc = resource_category.trim();
    CATEGORY_REASONS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(rc))
        .map(|(_, reason)| *reason)
        .unwrap_or(GENERIC_REASON)
}

//! Built-in starter catalog, used when no catalog file is configured.

use crate::recommend::mapping::{
    FINANCE, FOUNDATION, MARKETING_AND_SALES, OPERATIONS, PRODUCT_DEVELOPMENT,
};
use crate::resource::{Resource, ResourceCategory, ResourceType};
use chrono::Utc;

pub const CATEGORIES: &[ResourceCategory] = &[
    ResourceCategory {
        id: "cat_foundation",
        name: FOUNDATION,
        description: "Legal and business setup resources",
        icon: "building",
        color: "blue",
        sort_order: 1,
    },
    ResourceCategory {
        id: "cat_product",
        name: PRODUCT_DEVELOPMENT,
        description: "MVP and product development resources",
        icon: "code",
        color: "green",
        sort_order: 2,
    },
    ResourceCategory {
        id: "cat_marketing",
        name: MARKETING_AND_SALES,
        description: "Marketing strategy and sales resources",
        icon: "megaphone",
        color: "purple",
        sort_order: 3,
    },
    ResourceCategory {
        id: "cat_operations",
        name: OPERATIONS,
        description: "Business operations and management resources",
        icon: "settings",
        color: "orange",
        sort_order: 4,
    },
    ResourceCategory {
        id: "cat_finance",
        name: FINANCE,
        description: "Financial planning and funding resources",
        icon: "dollar-sign",
        color: "red",
        sort_order: 5,
    },
];

// (id, category, type, title, url, description, featured, sort_order)
type SeedRow = (
    &'static str,
    &'static str,
    ResourceType,
    &'static str,
    &'static str,
    &'static str,
    bool,
    i32,
);

const RESOURCES: &[SeedRow] = &[
    (
        "res_1",
        FOUNDATION,
        ResourceType::Course,
        "Business Structure Guide",
        "https://coursera.org/business-structure",
        "Complete guide to choosing the right business structure",
        true,
        1,
    ),
    (
        "res_2",
        FOUNDATION,
        ResourceType::Article,
        "Legal Requirements Checklist",
        "https://sba.gov/legal-requirements",
        "Essential legal requirements for starting a business",
        true,
        2,
    ),
    (
        "res_3",
        PRODUCT_DEVELOPMENT,
        ResourceType::Course,
        "MVP Development Course",
        "https://udemy.com/mvp-development",
        "Learn to build and validate your minimum viable product",
        true,
        1,
    ),
    (
        "res_4",
        PRODUCT_DEVELOPMENT,
        ResourceType::Tool,
        "Figma Design Tool",
        "https://figma.com",
        "Professional design tool for creating product mockups",
        false,
        2,
    ),
    (
        "res_5",
        MARKETING_AND_SALES,
        ResourceType::Course,
        "Digital Marketing Strategy",
        "https://coursera.org/digital-marketing",
        "Comprehensive digital marketing course",
        true,
        1,
    ),
    (
        "res_6",
        MARKETING_AND_SALES,
        ResourceType::Book,
        "Lean Startup by Eric Ries",
        "https://amazon.com/lean-startup",
        "Essential reading for startup methodology",
        true,
        2,
    ),
    (
        "res_7",
        OPERATIONS,
        ResourceType::Course,
        "Operations Management",
        "https://edx.org/operations-management",
        "Learn to manage business operations effectively",
        false,
        1,
    ),
    (
        "res_8",
        OPERATIONS,
        ResourceType::Tool,
        "Trello Project Management",
        "https://trello.com",
        "Visual project management and collaboration tool",
        false,
        2,
    ),
    (
        "res_9",
        FINANCE,
        ResourceType::Course,
        "Financial Planning for Startups",
        "https://coursera.org/financial-planning",
        "Learn financial planning and budgeting for startups",
        true,
        1,
    ),
    (
        "res_10",
        FINANCE,
        ResourceType::Article,
        "Funding Options Guide",
        "https://sba.gov/funding-options",
        "Complete guide to startup funding options",
        true,
        2,
    ),
];

/// Ten English resources, two per canonical category.
pub fn default_resources() -> Vec<Resource> {
    let now = Utc::now();
    RESOURCES
        .iter()
        .map(
            |&(id, category, resource_type, title, url, description, is_featured, sort_order)| {
                Resource {
                    id: id.to_string(),
                    category: category.to_string(),
                    resource_type,
                    title: title.to_string(),
                    url: Some(url.to_string()),
                    description: Some(description.to_string()),
                    language: "en".to_string(),
                    is_featured,
                    sort_order,
                    created_at: now,
                    updated_at: now,
                }
            },
        )
        .collect()
}

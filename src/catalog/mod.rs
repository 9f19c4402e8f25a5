// src/catalog/mod.rs
//! Resource catalog: the read side the recommender consumes and the admin
//! write side the HTTP layer exposes.

pub mod memory;
pub mod reload;
pub mod seed;

use crate::resource::{DraftError, Resource, ResourceCategory, ResourceDraft};
use async_trait::async_trait;
use std::cmp::Ordering;
use thiserror::Error;

pub use crate::catalog::memory::InMemoryCatalog;
pub use crate::catalog::reload::start_catalog_reload_thread;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("resource `{0}` not found")]
    NotFound(String),
    #[error(transparent)]
    Invalid(#[from] DraftError),
}

/// Read access used by the recommender.
///
/// Both listing calls return resources visible in `language`
/// (that language or the English fallback).
#[async_trait]
pub trait ResourceCatalog: Send + Sync {
    /// Ordered by category, then featured first, then sort order.
    async fn all_resources(&self, language: &str) -> Result<Vec<Resource>, CatalogError>;

    /// Only `category` (exact), ordered featured first, then sort order.
    async fn resources_by_category(
        &self,
        category: &str,
        language: &str,
    ) -> Result<Vec<Resource>, CatalogError>;

    async fn categories(&self) -> Result<Vec<ResourceCategory>, CatalogError>;

    fn name(&self) -> &'static str;
}

/// Admin operations on top of the read side.
#[async_trait]
pub trait ResourceStore: ResourceCatalog {
    async fn get(&self, id: &str) -> Result<Resource, CatalogError>;
    async fn create(&self, draft: ResourceDraft) -> Result<Resource, CatalogError>;
    /// Full replacement of every editable field; id and creation time are kept.
    async fn update(&self, id: &str, draft: ResourceDraft) -> Result<Resource, CatalogError>;
    async fn delete(&self, id: &str) -> Result<(), CatalogError>;
}

/// Featured first, then ascending sort order.
pub(crate) fn featured_then_sort_order(a: &Resource, b: &Resource) -> Ordering {
    b.is_featured
        .cmp(&a.is_featured)
        .then_with(|| a.sort_order.cmp(&b.sort_order))
}

pub(crate) fn category_then_featured(a: &Resource, b: &Resource) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| featured_then_sort_order(a, b))
}

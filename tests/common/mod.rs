//! Shared test doubles.

use async_trait::async_trait;
use resource_recommender::{
    resource::{Resource, ResourceCategory, ResourceDraft},
    CatalogError, ResourceCatalog, ResourceStore,
};

/// A catalog whose every call fails as if the backing store were down.
pub struct DownCatalog;

fn down() -> CatalogError {
    CatalogError::Unavailable("connection refused".into())
}

#[async_trait]
impl ResourceCatalog for DownCatalog {
    async fn all_resources(&self, _language: &str) -> Result<Vec<Resource>, CatalogError> {
        Err(down())
    }
    async fn resources_by_category(
        &self,
        _category: &str,
        _language: &str,
    ) -> Result<Vec<Resource>, CatalogError> {
        Err(down())
    }
    async fn categories(&self) -> Result<Vec<ResourceCategory>, CatalogError> {
        Err(down())
    }
    fn name(&self) -> &'static str {
        "down"
    }
}

#[async_trait]
impl ResourceStore for DownCatalog {
    async fn get(&self, _id: &str) -> Result<Resource, CatalogError> {
        Err(down())
    }
    async fn create(&self, _draft: ResourceDraft) -> Result<Resource, CatalogError> {
        Err(down())
    }
    async fn update(&self, _id: &str, _draft: ResourceDraft) -> Result<Resource, CatalogError> {
        Err(down())
    }
    async fn delete(&self, _id: &str) -> Result<(), CatalogError> {
        Err(down())
    }
}

//! In-process catalog backed by a shared `Vec<Resource>`.
//!
//! Clones share the same snapshot, so the reload watcher and the HTTP layer
//! see each other's writes.

use super::{
    category_then_featured, featured_then_sort_order, seed, CatalogError, ResourceCatalog,
    ResourceStore,
};
use crate::resource::{Resource, ResourceCategory, ResourceDraft};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use metrics::counter;
use rand::{distr::Alphanumeric, Rng};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Vec<Resource>>>,
}

#[derive(Deserialize)]
struct CatalogFile {
    resources: Vec<Resource>,
}

impl InMemoryCatalog {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(resources)),
        }
    }

    /// Catalog pre-filled with the built-in starter resources.
    pub fn seeded() -> Self {
        Self::new(seed::default_resources())
    }

    /// `path` given → load that JSON file; otherwise the seed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => {
                info!("no catalog file configured, using built-in seed");
                Ok(Self::seeded())
            }
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading catalog from {}", path.display()))?;
        let resources = parse_catalog(&s)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        info!(path = %path.display(), count = resources.len(), "catalog loaded");
        Ok(Self::new(resources))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(Self::new(parse_catalog(s)?))
    }

    /// Swap the whole snapshot (hot reload).
    pub fn replace_all(&self, resources: Vec<Resource>) -> Result<(), CatalogError> {
        let mut guard = self.write()?;
        *guard = resources;
        Ok(())
    }

    pub fn snapshot(&self) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> usize {
        self.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let inner = Arc::clone(&self.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write();
            panic!("poisoning catalog lock");
        })
        .join();
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Resource>>, CatalogError> {
        self.inner
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Resource>>, CatalogError> {
        self.inner
            .write()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".into()))
    }
}

/// Accepts `{"resources": [...]}` or a bare array.
pub(crate) fn parse_catalog(s: &str) -> Result<Vec<Resource>> {
    let resources = match serde_json::from_str::<CatalogFile>(s) {
        Ok(f) => f.resources,
        Err(_) => serde_json::from_str::<Vec<Resource>>(s)
            .map_err(|e| anyhow!("unsupported catalog format: {e}"))?,
    };

    let mut seen = HashSet::new();
    for r in &resources {
        if r.id.trim().is_empty() || r.title.trim().is_empty() || r.category.trim().is_empty() {
            return Err(anyhow!(
                "resource `{}` must have non-empty id, title and category",
                r.id
            ));
        }
        if !seen.insert(r.id.as_str()) {
            return Err(anyhow!("duplicate resource id `{}`", r.id));
        }
    }
    Ok(resources)
}

/// `res_<unix millis>_<9 lowercase alphanumerics>`
fn new_resource_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("res_{}_{}", Utc::now().timestamp_millis(), suffix)
}

#[async_trait]
impl ResourceCatalog for InMemoryCatalog {
    async fn all_resources(&self, language: &str) -> Result<Vec<Resource>, CatalogError> {
        let mut out: Vec<Resource> = self
            .read()?
            .iter()
            .filter(|r| r.visible_in(language))
            .cloned()
            .collect();
        out.sort_by(category_then_featured);
        Ok(out)
    }

    async fn resources_by_category(
        &self,
        category: &str,
        language: &str,
    ) -> Result<Vec<Resource>, CatalogError> {
        let mut out: Vec<Resource> = self
            .read()?
            .iter()
            .filter(|r| r.category == category && r.visible_in(language))
            .cloned()
            .collect();
        out.sort_by(featured_then_sort_order);
        Ok(out)
    }

    async fn categories(&self) -> Result<Vec<ResourceCategory>, CatalogError> {
        let mut out = seed::CATEGORIES.to_vec();
        out.sort_by_key(|c| c.sort_order);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}

#[async_trait]
impl ResourceStore for InMemoryCatalog {
    async fn get(&self, id: &str) -> Result<Resource, CatalogError> {
        self.read()?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: ResourceDraft) -> Result<Resource, CatalogError> {
        let resource = draft.into_resource(new_resource_id(), Utc::now())?;
        self.write()?.push(resource.clone());
        counter!("catalog_mutations_total", "op" => "create").increment(1);
        debug!(id = %resource.id, category = %resource.category, "resource created");
        Ok(resource)
    }

    async fn update(&self, id: &str, draft: ResourceDraft) -> Result<Resource, CatalogError> {
        let mut guard = self.write()?;
        let slot = guard
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let mut updated = draft.into_resource(id.to_string(), Utc::now())?;
        updated.created_at = slot.created_at;
        *slot = updated.clone();
        counter!("catalog_mutations_total", "op" => "update").increment(1);
        debug!(%id, "resource updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let mut guard = self.write()?;
        let before = guard.len();
        guard.retain(|r| r.id != id);
        if guard.len() == before {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        counter!("catalog_mutations_total", "op" => "delete").increment(1);
        debug!(%id, "resource deleted");
        Ok(())
    }
}

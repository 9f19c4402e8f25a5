use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, Query, State},
    http::{header::AUTHORIZATION, HeaderMap},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::catalog::{
    start_catalog_reload_thread, InMemoryCatalog, ResourceCatalog, ResourceStore,
};
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::recommend::service::RecommendMode;
use crate::recommend::{Recommender, SearchFilters};
use crate::resource::{Resource, ResourceCategory, ResourceDraft, ResourceType, ScoredResource};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ResourceStore>,
    recommender: Recommender,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new<C>(catalog: Arc<C>, config: AppConfig) -> Self
    where
        C: ResourceStore + 'static,
    {
        let read: Arc<dyn ResourceCatalog> = catalog.clone();
        Self {
            store: catalog,
            recommender: Recommender::new(read),
            config: Arc::new(config),
        }
    }

    /// Build state from resolved config: load the catalog and, in dev, start
    /// the file watcher.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = InMemoryCatalog::load(config.catalog_path.as_deref())?;
        if config.hot_reload_active() {
            if let Some(p) = config.catalog_path.as_deref() {
                start_catalog_reload_thread(catalog.clone(), p.to_path_buf());
            }
        }
        info!(
            resources = catalog.len(),
            default_language = %config.default_language,
            default_limit = config.default_limit,
            admin = config.admin_token.is_some(),
            "recommender state ready"
        );
        Ok(Self::new(Arc::new(catalog), config))
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/resources", get(list_resources).post(create_resource))
        .route("/resources/categories", get(list_categories))
        .route("/resources/recommend", get(recommend))
        .route(
            "/resources/{id}",
            get(get_resource).put(update_resource).delete(delete_resource),
        )
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/* ----------------------------
Recommendations
---------------------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendParams {
    #[serde(rename = "type")]
    pub mode: Option<String>,
    pub idea_category: Option<String>,
    pub node_category: Option<String>,
    pub query: Option<String>,
    pub language: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub resource_type: Option<String>,
    pub featured: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EchoFilters {
    idea_category: Option<String>,
    node_category: Option<String>,
    query: Option<String>,
    language: String,
}

#[derive(Debug, Serialize)]
struct RecommendResp {
    resources: Vec<ScoredResource>,
    count: usize,
    #[serde(rename = "type")]
    mode: RecommendMode,
    filters: EchoFilters,
}

const INVALID_MODE: &str = "Invalid recommendation type. Use: idea, node, or search";

fn parse_limit(raw: Option<&str>, default: usize) -> ApiResult<usize> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ApiError::bad_request("Limit must be a positive integer")),
        },
    }
}

fn parse_filters(p: &RecommendParams) -> ApiResult<SearchFilters> {
    let resource_type = non_empty(&p.resource_type)
        .map(str::parse::<ResourceType>)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let featured = match non_empty(&p.featured) {
        None => None,
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(_) => return Err(ApiError::bad_request("Featured must be true or false")),
    };
    Ok(SearchFilters {
        category: non_empty(&p.category).map(str::to_string),
        resource_type,
        featured,
    })
}

async fn recommend(
    State(state): State<AppState>,
    Query(p): Query<RecommendParams>,
) -> ApiResult<Json<RecommendResp>> {
    let language = non_empty(&p.language)
        .map(str::to_string)
        .unwrap_or_else(|| state.config.default_language.clone());
    let mode = non_empty(&p.mode)
        .and_then(RecommendMode::parse)
        .ok_or_else(|| ApiError::bad_request(INVALID_MODE))?;

    let resources = match mode {
        RecommendMode::Idea => {
            let idea = non_empty(&p.idea_category).ok_or_else(|| {
                ApiError::bad_request("Idea category is required for idea recommendations")
            })?;
            let limit = parse_limit(p.limit.as_deref(), state.config.default_limit)?;
            state
                .recommender
                .recommend_for_idea(idea, &language, limit)
                .await
        }
        RecommendMode::Node => {
            let node = non_empty(&p.node_category).ok_or_else(|| {
                ApiError::bad_request("Node category is required for node recommendations")
            })?;
            state.recommender.recommend_for_node(node, &language).await
        }
        RecommendMode::Search => {
            let query = non_empty(&p.query)
                .ok_or_else(|| ApiError::bad_request("Search query is required for search"))?;
            let filters = parse_filters(&p)?;
            state.recommender.search(query, &language, &filters).await
        }
    };

    Ok(Json(RecommendResp {
        count: resources.len(),
        resources,
        mode,
        filters: EchoFilters {
            idea_category: p.idea_category,
            node_category: p.node_category,
            query: p.query,
            language,
        },
    }))
}

/* ----------------------------
Catalog reads
---------------------------- */

#[derive(Debug, Deserialize)]
struct ListParams {
    category: Option<String>,
    language: Option<String>,
}

#[derive(Serialize)]
struct ResourcesResp {
    resources: Vec<Resource>,
}

async fn list_resources(
    State(state): State<AppState>,
    Query(q): Query<ListParams>,
) -> ApiResult<Json<ResourcesResp>> {
    let language = non_empty(&q.language)
        .map(str::to_string)
        .unwrap_or_else(|| state.config.default_language.clone());
    let res = match non_empty(&q.category) {
        Some(c) => state.store.resources_by_category(c, &language).await,
        None => state.store.all_resources(&language).await,
    };
    let resources = res.map_err(|e| {
        warn!(error = %e, "resource listing failed");
        ApiError::Internal("Failed to fetch resources".into())
    })?;
    Ok(Json(ResourcesResp { resources }))
}

#[derive(Serialize)]
struct CategoriesResp {
    categories: Vec<ResourceCategory>,
}

async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResp>> {
    let categories = state.store.categories().await?;
    Ok(Json(CategoriesResp { categories }))
}

async fn get_resource(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> ApiResult<Json<Resource>> {
    Ok(Json(state.store.get(&id).await?))
}

/* ----------------------------
Admin mutations
---------------------------- */

fn require_admin(state: &AppState, headers: &HeaderMap) -> ApiResult<()> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        warn!("admin route called but no admin token is configured");
        return Err(ApiError::Unauthorized("Unauthorized".into()));
    };
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);
    if presented == Some(expected) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("Unauthorized".into()))
    }
}

#[derive(Serialize)]
struct MutationResp {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<Resource>,
}

async fn create_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<ResourceDraft>,
) -> ApiResult<Json<MutationResp>> {
    require_admin(&state, &headers)?;
    let resource = state.store.create(draft).await?;
    info!(id = %resource.id, category = %resource.category, "resource created");
    Ok(Json(MutationResp {
        message: "Resource created successfully",
        resource: Some(resource),
    }))
}

async fn update_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    UrlPath(id): UrlPath<String>,
    Json(draft): Json<ResourceDraft>,
) -> ApiResult<Json<MutationResp>> {
    require_admin(&state, &headers)?;
    let resource = state.store.update(&id, draft).await?;
    info!(%id, "resource updated");
    Ok(Json(MutationResp {
        message: "Resource updated successfully",
        resource: Some(resource),
    }))
}

async fn delete_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    UrlPath(id): UrlPath<String>,
) -> ApiResult<Json<MutationResp>> {
    require_admin(&state, &headers)?;
    state.store.delete(&id).await?;
    info!(%id, "resource deleted");
    Ok(Json(MutationResp {
        message: "Resource deleted successfully",
        resource: None,
    }))
}

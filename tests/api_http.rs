// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - GET /resources/recommend (idea | node | search, validation errors)
// - GET /resources, /resources/categories
// - POST / PUT / DELETE /resources (admin token)

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use resource_recommender::{api, AppConfig, AppState, InMemoryCatalog};

const BODY_LIMIT: usize = 1024 * 1024;
const TOKEN: &str = "test-admin-token";

fn test_router() -> Router {
    let config = AppConfig {
        admin_token: Some(TOKEN.to_string()),
        ..AppConfig::default()
    };
    api::router(AppState::new(Arc::new(InMemoryCatalog::seeded()), config))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET");
    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Json) {
    let resp = app.clone().oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
    (status, v)
}

fn admin_request(method: &str, uri: &str, token: Option<&str>, body: Option<Json>) -> Request<Body> {
    let mut b = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(t) = token {
        b = b.header("authorization", format!("Bearer {t}"));
    }
    let body = body.map(|v| Body::from(v.to_string())).unwrap_or_else(Body::empty);
    b.body(body).expect("build admin request")
}

fn ids(v: &Json) -> Vec<String> {
    v["resources"]
        .as_array()
        .expect("resources array")
        .iter()
        .map(|r| r["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_router();
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap().trim(), "OK");
}

#[tokio::test]
async fn idea_mode_returns_ranked_resources_and_echo() {
    let app = test_router();
    let (status, v) = get_json(&app, "/resources/recommend?type=idea&ideaCategory=Technology&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["type"], "idea");
    assert_eq!(v["count"], 3);
    assert_eq!(v["filters"]["ideaCategory"], "Technology");
    assert_eq!(v["filters"]["language"], "en");
    assert!(v["filters"]["query"].is_null());

    let first = &v["resources"][0];
    assert_eq!(first["relevanceScore"], 9);
    assert_eq!(first["isFeatured"], true);
    assert!(first.get("reason").is_some());
    assert!(first.get("title").is_some());
}

#[tokio::test]
async fn idea_mode_defaults_to_ten_results() {
    let app = test_router();
    let (status, v) = get_json(&app, "/resources/recommend?type=idea&ideaCategory=retail").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["count"], 10);
}

#[tokio::test]
async fn idea_mode_requires_category() {
    let app = test_router();
    let (status, v) = get_json(&app, "/resources/recommend?type=idea").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "Idea category is required for idea recommendations");
}

#[tokio::test]
async fn idea_mode_rejects_bad_limit() {
    let app = test_router();
    for uri in [
        "/resources/recommend?type=idea&ideaCategory=retail&limit=0",
        "/resources/recommend?type=idea&ideaCategory=retail&limit=ten",
    ] {
        let (status, _) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn unknown_or_missing_type_is_rejected() {
    let app = test_router();
    for uri in ["/resources/recommend", "/resources/recommend?type=popular"] {
        let (status, v) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            v["error"],
            "Invalid recommendation type. Use: idea, node, or search"
        );
    }
}

#[tokio::test]
async fn node_mode_lists_category_with_flat_score() {
    let app = test_router();
    let (status, v) =
        get_json(&app, "/resources/recommend?type=node&nodeCategory=Marketing%20%26%20Sales").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&v), vec!["res_5", "res_6"]);
    for r in v["resources"].as_array().unwrap() {
        assert_eq!(r["relevanceScore"], 5);
        assert_eq!(r["reason"], "Essential resources for Marketing & Sales");
    }

    let (status, v) = get_json(&app, "/resources/recommend?type=node").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "Node category is required for node recommendations");
}

#[tokio::test]
async fn search_mode_applies_type_filter() {
    let app = test_router();
    // "planning" hits res_9 (course, title) only among courses.
    let (status, v) = get_json(
        &app,
        "/resources/recommend?type=search&query=planning&resourceType=course",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&v), vec!["res_9"]);
    assert_eq!(v["resources"][0]["relevanceScore"], 3 + 2 + 1);
    assert_eq!(v["resources"][0]["reason"], "Matches your search criteria");
    assert_eq!(v["filters"]["query"], "planning");
}

#[tokio::test]
async fn search_mode_validation() {
    let app = test_router();
    let (status, v) = get_json(&app, "/resources/recommend?type=search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "Search query is required for search");

    let (status, _) = get_json(
        &app,
        "/resources/recommend?type=search&query=guide&resourceType=podcast",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_resources_and_categories() {
    let app = test_router();
    let (status, v) = get_json(&app, "/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["resources"].as_array().unwrap().len(), 10);

    let (_, v) = get_json(&app, "/resources?category=Finance").await;
    assert_eq!(ids(&v), vec!["res_9", "res_10"]);

    let (status, v) = get_json(&app, "/resources/categories").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = v["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Foundation", "Product Development", "Marketing & Sales", "Operations", "Finance"]
    );
}

#[tokio::test]
async fn admin_routes_require_token() {
    let app = test_router();
    let draft = json!({ "category": "Finance", "type": "book", "title": "Unit Economics" });

    let (status, v) = send(&app, admin_request("POST", "/resources", None, Some(draft.clone()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(v["error"], "Unauthorized");

    let (status, _) = send(
        &app,
        admin_request("POST", "/resources", Some("wrong"), Some(draft)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_without_configured_token_refuses() {
    let app = api::router(AppState::new(
        Arc::new(InMemoryCatalog::seeded()),
        AppConfig::default(),
    ));
    let (status, _) = send(&app, admin_request("DELETE", "/resources/res_1", Some(""), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_create_update_delete_flow() {
    let app = test_router();

    let (status, v) = send(
        &app,
        admin_request(
            "POST",
            "/resources",
            Some(TOKEN),
            Some(json!({
                "category": "Finance",
                "type": "course",
                "title": "Budget Forecasting",
                "description": "Build a 12-month budget",
                "isFeatured": true
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["message"], "Resource created successfully");
    let id = v["resource"]["id"].as_str().expect("id").to_string();

    let (_, v) = get_json(&app, "/resources/recommend?type=search&query=budget").await;
    assert_eq!(ids(&v)[0], id, "new featured title+description hit ranks first");

    let (status, v) = send(
        &app,
        admin_request(
            "PUT",
            &format!("/resources/{id}"),
            Some(TOKEN),
            Some(json!({ "category": "Operations", "type": "tool", "title": "Forecast Sheet" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["resource"]["category"], "Operations");
    assert_eq!(v["resource"]["isFeatured"], false);

    let (status, _) = send(&app, admin_request("DELETE", &format!("/resources/{id}"), Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, v) = get_json(&app, &format!("/resources/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"], "Resource not found");
}

#[tokio::test]
async fn admin_rejects_invalid_drafts_and_unknown_ids() {
    let app = test_router();

    let (status, v) = send(
        &app,
        admin_request("POST", "/resources", Some(TOKEN), Some(json!({ "category": "Finance" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "Category, type, and title are required");

    let (status, _) = send(
        &app,
        admin_request(
            "PUT",
            "/resources/res_missing",
            Some(TOKEN),
            Some(json!({ "category": "Finance", "type": "book", "title": "X" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

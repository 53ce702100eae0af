//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get};
use contact_api::config::ServerConfig;
use contact_api::router::build_app_router;
use contact_api::state::AppState;
use contact_db::{MemorySubmissionStore, SqliteSubmissionStore};

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(Arc::new(MemorySubmissionStore::new()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store"], "memory");
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_names_sqlite_store_from_config() {
    let pool = contact_db::create_pool("sqlite::memory:").await.unwrap();
    contact_db::init_schema(&pool).await.unwrap();
    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        ..common::test_config()
    };
    let state = AppState {
        store: Arc::new(SqliteSubmissionStore::new(pool)),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["store"], "sqlite");
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = common::build_test_app(Arc::new(common::FailingStore));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(MemorySubmissionStore::new()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(Arc::new(MemorySubmissionStore::new()));
    let response = get(app, "/").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

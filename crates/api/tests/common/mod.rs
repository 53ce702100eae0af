#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use contact_core::types::RecordId;
use contact_core::SanitizedSubmission;
use contact_db::{StoreError, SubmissionStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

use contact_api::config::ServerConfig;
use contact_api::router::build_app_router;
use contact_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "memory".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn SubmissionStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A store whose every operation fails as if the database had gone away.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn save(&self, _submission: &SanitizedSubmission) -> Result<RecordId, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

/// The form fields of a fully valid submission.
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("first_name", "Test"),
        ("last_name", "User"),
        ("email", "vanessa@example.com"),
        ("continent", "Europe"),
        ("message", "Hello"),
        ("gender", "P"),
        ("subject", "Order"),
        ("website", ""),
    ]
}

/// `valid_fields` with `name` set to `value`.
pub fn fields_with(name: &'static str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    valid_fields()
        .into_iter()
        .map(|(k, v)| if k == name { (k, value) } else { (k, v) })
        .collect()
}

/// Encode pairs as an `application/x-www-form-urlencoded` body.
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form_encode(pairs)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

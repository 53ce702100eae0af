use std::sync::Arc;

use contact_db::SubmissionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Where accepted submissions are persisted. Built once in `main`.
    pub store: Arc<dyn SubmissionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

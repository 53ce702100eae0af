//! Submission store seam.
//!
//! The HTTP layer holds one `Arc<dyn SubmissionStore>`, built at startup and
//! passed through application state. Each accepted submission is one `save`;
//! stores never update or delete.

mod memory;
mod sqlite;

use async_trait::async_trait;
use contact_core::types::RecordId;
use contact_core::SanitizedSubmission;

pub use memory::MemorySubmissionStore;
pub use sqlite::SqliteSubmissionStore;

/// Failure of the persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persists accepted submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist one accepted submission, returning its new identifier.
    async fn save(&self, submission: &SanitizedSubmission) -> Result<RecordId, StoreError>;

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

use async_trait::async_trait;
use contact_core::types::RecordId;
use contact_core::SanitizedSubmission;

use super::{StoreError, SubmissionStore};
use crate::repositories::ContactRepo;
use crate::DbPool;

/// [`SubmissionStore`] backed by the SQLite `contacts` table.
#[derive(Debug, Clone)]
pub struct SqliteSubmissionStore {
    pool: DbPool,
}

impl SqliteSubmissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionStore for SqliteSubmissionStore {
    async fn save(&self, submission: &SanitizedSubmission) -> Result<RecordId, StoreError> {
        let contact = ContactRepo::create(&self.pool, submission).await?;
        tracing::info!(contact_id = contact.id, "Contact submission stored");
        Ok(contact.id)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::contact::Contact;

    async fn store() -> SqliteSubmissionStore {
        let pool = crate::create_pool("sqlite::memory:").await.unwrap();
        crate::init_schema(&pool).await.unwrap();
        SqliteSubmissionStore::new(pool)
    }

    fn submission() -> SanitizedSubmission {
        SanitizedSubmission {
            first_name: "Test".into(),
            last_name: "User".into(),
            email: "vanessa@example.com".into(),
            continent: "Europe".into(),
            message: "Hello".into(),
            gender: "O".into(),
            subject: "Repair".into(),
        }
    }

    #[tokio::test]
    async fn save_persists_the_submission() {
        let store = store().await;
        let id = store.save(&submission()).await.unwrap();

        let stored = ContactRepo::find_by_id(store.pool(), id).await.unwrap();
        assert_eq!(stored, Some(Contact::from_submission(id, &submission())));
    }

    #[tokio::test]
    async fn save_without_schema_is_a_database_error() {
        let pool = crate::create_pool("sqlite::memory:").await.unwrap();
        let store = SqliteSubmissionStore::new(pool);

        let err = store.save(&submission()).await.unwrap_err();
        assert_matches!(err, StoreError::Database(_));
    }

    #[tokio::test]
    async fn health_check_reflects_pool_state() {
        let store = store().await;
        assert!(store.health_check().await.is_ok());

        store.pool().close().await;
        assert!(store.health_check().await.is_err());
    }
}

use async_trait::async_trait;
use contact_core::types::RecordId;
use contact_core::SanitizedSubmission;
use tokio::sync::RwLock;

use super::{StoreError, SubmissionStore};
use crate::models::contact::Contact;

/// Process-local [`SubmissionStore`]. Identifiers start at 1.
#[derive(Debug, Default)]
pub struct MemorySubmissionStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far, in insertion order.
    pub async fn contacts(&self) -> Vec<Contact> {
        self.contacts.read().await.clone()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn save(&self, submission: &SanitizedSubmission) -> Result<RecordId, StoreError> {
        let mut contacts = self.contacts.write().await;
        let id = contacts.len() as RecordId + 1;
        contacts.push(Contact::from_submission(id, submission));
        tracing::debug!(contact_id = id, "Contact submission stored in memory");
        Ok(id)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemorySubmissionStore::new();
        let submission = SanitizedSubmission::default();

        assert_eq!(store.save(&submission).await.unwrap(), 1);
        assert_eq!(store.save(&submission).await.unwrap(), 2);

        let ids: Vec<_> = store.contacts().await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn health_check_always_passes() {
        assert!(MemorySubmissionStore::new().health_check().await.is_ok());
    }
}

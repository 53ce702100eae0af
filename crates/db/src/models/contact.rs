//! Contact entity model.

use contact_core::types::RecordId;
use contact_core::SanitizedSubmission;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Contact {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub continent: String,
    pub message: String,
    pub gender: String,
    pub subject: String,
}

impl Contact {
    /// Attach an identifier to an accepted submission.
    pub fn from_submission(id: RecordId, s: &SanitizedSubmission) -> Self {
        Self {
            id,
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            email: s.email.clone(),
            continent: s.continent.clone(),
            message: s.message.clone(),
            gender: s.gender.clone(),
            subject: s.subject.clone(),
        }
    }
}

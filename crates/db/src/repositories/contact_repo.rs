//! Repository for the `contacts` table.

use contact_core::types::RecordId;
use contact_core::SanitizedSubmission;
use sqlx::SqlitePool;

use crate::models::contact::Contact;

/// Column list for `contacts` queries.
const COLUMNS: &str = "\
    id, first_name, last_name, email, continent, message, gender, subject";

/// Insert and lookup helpers for contacts. There is no update or delete path.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert an accepted submission, returning the full row.
    pub async fn create(
        pool: &SqlitePool,
        input: &SanitizedSubmission,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts \
                (first_name, last_name, email, continent, message, gender, subject) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.continent)
            .bind(&input.message)
            .bind(&input.gender)
            .bind(&input.subject)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: RecordId,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = ?");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of stored contacts.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

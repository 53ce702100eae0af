//! Contact submission persistence.
//!
//! Provides the [`SubmissionStore`] seam the HTTP layer saves accepted
//! submissions through, a SQLite implementation on top of sqlx, and an
//! in-memory implementation for tests and throwaway runs.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{MemorySubmissionStore, SqliteSubmissionStore, StoreError, SubmissionStore};

pub type DbPool = sqlx::SqlitePool;

/// Table and index definitions, applied idempotently at startup.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS contacts (\
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        first_name TEXT NOT NULL, \
        last_name TEXT NOT NULL, \
        email TEXT NOT NULL, \
        continent TEXT NOT NULL, \
        message TEXT NOT NULL, \
        gender TEXT NOT NULL, \
        subject TEXT NOT NULL)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_first_name ON contacts (first_name)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_last_name ON contacts (last_name)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_email ON contacts (email)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_continent ON contacts (continent)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_message ON contacts (message)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_gender ON contacts (gender)",
    "CREATE INDEX IF NOT EXISTS ix_contacts_subject ON contacts (subject)",
];

/// Create a connection pool from a database URL.
///
/// In-memory databases are private to their connection, so they get a
/// single connection that is never recycled.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    pool_options.connect_with(options).await
}

/// Create the `contacts` table and its indexes if they do not exist yet.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let tables: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'contacts'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables.0, 1);
    }

    #[tokio::test]
    async fn every_text_column_is_indexed() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        init_schema(&pool).await.unwrap();

        let indexes: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND tbl_name = 'contacts' \
             AND name LIKE 'ix_contacts_%'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(indexes.0, 7);
    }

    #[tokio::test]
    async fn health_check_passes_on_open_pool() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        health_check(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn health_check_fails_on_closed_pool() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        pool.close().await;
        assert!(health_check(&pool).await.is_err());
    }
}

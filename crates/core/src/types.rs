/// Primary key of a persisted submission (SQLite `INTEGER PRIMARY KEY`).
pub type RecordId = i64;

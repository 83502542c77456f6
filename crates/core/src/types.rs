/// Primary keys are PostgreSQL SERIAL (INT4).
pub type DbId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

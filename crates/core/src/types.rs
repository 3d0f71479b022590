/// Project ids are plain integers assigned by the catalog.
pub type ProjectId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

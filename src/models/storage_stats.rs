use crate::models::session_record::SessionRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate view over the session log. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageStats {
    pub count: usize,
    /// Length in bytes of the serialized log as written to storage.
    pub approx_bytes: usize,
    pub total_duration_seconds: u64,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
    /// Most recent records, newest first.
    pub recent: Vec<SessionRecord>,
}

impl StorageStats {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

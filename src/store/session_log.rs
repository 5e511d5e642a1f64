//! The session log store: owns the records, keeps them bounded and
//! mirrors them to durable storage.

use crate::errors::{AppResult, StoreWarning};
use crate::export::csv::records_to_csv;
use crate::models::{SessionRecord, StorageStats};
use crate::store::retention::RetentionPolicy;
use crate::store::storage::KeyValueStorage;
use crate::utils::date::now_millis;
use chrono::{DateTime, Utc};

/// Storage key holding the serialized log (a JSON array of records).
pub const STORAGE_KEY: &str = "sessionLogData";

/// How many records the stats carry for the recent-sessions list.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Parse a serialized log. Anything but a JSON array of records is an error.
pub fn parse_log(payload: &str) -> AppResult<Vec<SessionRecord>> {
    Ok(serde_json::from_str(payload)?)
}

/// Compact form written to storage.
pub fn serialize_log(records: &[SessionRecord]) -> AppResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Index that keeps the log ordered by timestamp. Equal timestamps keep
/// arrival order; records without one sort first.
fn chronological_slot(records: &[SessionRecord], record: &SessionRecord) -> usize {
    match record.timestamp {
        Some(ts) => records.partition_point(|r| r.timestamp.is_none_or(|t| t <= ts)),
        None => records.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub loaded: usize,
    pub warning: Option<StoreWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { bytes: usize },
    Failed(StoreWarning),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }

    pub fn warning(&self) -> Option<&StoreWarning> {
        match self {
            SaveOutcome::Saved { .. } => None,
            SaveOutcome::Failed(w) => Some(w),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Logging is disabled: nothing was recorded or written.
    Suppressed,
    Appended { evicted: usize, save: SaveOutcome },
}

impl AppendOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, AppendOutcome::Appended { .. })
    }

    pub fn warning(&self) -> Option<&StoreWarning> {
        match self {
            AppendOutcome::Suppressed => None,
            AppendOutcome::Appended { save, .. } => save.warning(),
        }
    }
}

pub struct SessionLogStore<S: KeyValueStorage> {
    storage: S,
    records: Vec<SessionRecord>,
    dirty: bool,
    enabled: bool,
    retention: RetentionPolicy,
    display_limit: usize,
}

impl<S: KeyValueStorage> SessionLogStore<S> {
    /// Empty, enabled store. Call `load_from_storage` to pick up saved records.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            records: Vec::new(),
            dirty: false,
            enabled: true,
            retention: RetentionPolicy::default(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_display_limit(mut self, display_limit: usize) -> Self {
        self.display_limit = display_limit;
        self
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace the in-memory log with what storage holds.
    ///
    /// A missing or blank key yields an empty log. A payload that does not
    /// parse, or a failing read, also yields an empty log plus a warning.
    pub fn load_from_storage(&mut self) -> LoadOutcome {
        let (records, warning) = match self.storage.get(STORAGE_KEY) {
            Ok(None) => (Vec::new(), None),
            Ok(Some(payload)) if payload.trim().is_empty() => (Vec::new(), None),
            Ok(Some(payload)) => match parse_log(&payload) {
                Ok(records) => (records, None),
                Err(e) => (Vec::new(), Some(StoreWarning::CorruptPayload(e.to_string()))),
            },
            Err(e) => (Vec::new(), Some(StoreWarning::ReadFailed(e.to_string()))),
        };

        self.records = records;
        self.dirty = false;

        LoadOutcome {
            loaded: self.records.len(),
            warning,
        }
    }

    /// Write the whole log under `STORAGE_KEY` in a single `set`.
    /// On failure the log stays in memory and the store stays dirty.
    pub fn save_to_storage(&mut self) -> SaveOutcome {
        let payload = match serialize_log(&self.records) {
            Ok(p) => p,
            Err(e) => return SaveOutcome::Failed(StoreWarning::WriteFailed(e.to_string())),
        };

        match self.storage.set(STORAGE_KEY, &payload) {
            Ok(()) => {
                self.dirty = false;
                SaveOutcome::Saved {
                    bytes: payload.len(),
                }
            }
            Err(e) => SaveOutcome::Failed(StoreWarning::WriteFailed(e.to_string())),
        }
    }

    /// Record a completed session and persist the log before returning.
    /// A back-dated record is slotted in by timestamp, so eviction always
    /// hits the chronologically oldest entries.
    pub fn append(&mut self, record: SessionRecord) -> AppResult<AppendOutcome> {
        self.append_at(record, now_millis())
    }

    /// `append` with an explicit clock, used for timestamp defaulting and
    /// age-based retention.
    pub fn append_at(
        &mut self,
        mut record: SessionRecord,
        now: DateTime<Utc>,
    ) -> AppResult<AppendOutcome> {
        if !self.enabled {
            return Ok(AppendOutcome::Suppressed);
        }

        record.validate()?;
        record.normalize_timestamp(now);

        let at = chronological_slot(&self.records, &record);
        self.records.insert(at, record);
        let evicted = self.retention.trim(&mut self.records, now);
        self.dirty = true;

        let save = self.save_to_storage();
        Ok(AppendOutcome::Appended { evicted, save })
    }

    /// Erase every record and persist the empty log.
    ///
    /// Irreversible. Asking the user is the caller's job
    /// (see `PanelController::clear_session_log`).
    pub fn clear(&mut self) -> SaveOutcome {
        self.records.clear();
        self.dirty = true;
        self.save_to_storage()
    }

    pub fn compute_stats(&self) -> StorageStats {
        let approx_bytes = serialize_log(&self.records)
            .map(|s| s.len())
            .unwrap_or_default();

        StorageStats {
            count: self.records.len(),
            approx_bytes,
            total_duration_seconds: self.records.iter().map(|r| r.duration_seconds).sum(),
            first_timestamp: self.records.iter().find_map(|r| r.timestamp),
            last_timestamp: self.records.iter().rev().find_map(|r| r.timestamp),
            recent: self
                .records
                .iter()
                .rev()
                .take(self.display_limit)
                .cloned()
                .collect(),
        }
    }

    /// Full log, chronological, as a pretty-printed JSON array.
    pub fn export_as_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Full log as CSV, one row per session.
    pub fn export_as_csv(&self) -> AppResult<String> {
        records_to_csv(&self.records)
    }
}

use crate::models::SessionRecord;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_MAX_RECORDS: usize = 500;

/// Bound applied to the log on every append. Eviction is always
/// oldest-first, i.e. from the front of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep the most recent N records (N is at least 1).
    MaxRecords(usize),
    /// Keep records that ended within the last N days. Records without a
    /// timestamp count as expired.
    MaxAgeDays(u32),
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        RetentionPolicy::MaxRecords(DEFAULT_MAX_RECORDS)
    }
}

impl RetentionPolicy {
    /// Drop records that fall outside the bound. Returns how many were evicted.
    pub fn trim(&self, records: &mut Vec<SessionRecord>, now: DateTime<Utc>) -> usize {
        match *self {
            RetentionPolicy::MaxRecords(max) => {
                let evict = records.len().saturating_sub(max.max(1));
                records.drain(..evict);
                evict
            }
            RetentionPolicy::MaxAgeDays(days) => {
                let cutoff = now - Duration::days(i64::from(days));
                let before = records.len();
                records.retain(|r| r.timestamp.is_some_and(|ts| ts >= cutoff));
                before - records.len()
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RetentionPolicy::MaxRecords(n) => format!("most recent {n} sessions"),
            RetentionPolicy::MaxAgeDays(d) => format!("sessions from the last {d} days"),
        }
    }
}

// src/export/csv.rs

use crate::errors::AppResult;
use crate::models::SessionRecord;
use crate::utils::date::format_timestamp;
use crate::utils::secs2readable;
use serde::Serialize;

/// Flat row for CSV export. Pass-through fields are kept as one JSON cell.
#[derive(Serialize, Clone, Debug)]
struct SessionCsvRow {
    timestamp: String,
    kind: String,
    duration_seconds: u64,
    duration: String,
    extra: String,
}

impl SessionCsvRow {
    fn from_record(r: &SessionRecord) -> AppResult<Self> {
        let extra = if r.extra.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&r.extra)?
        };

        Ok(Self {
            timestamp: r.timestamp.as_ref().map(format_timestamp).unwrap_or_default(),
            kind: r.kind.as_str().to_string(),
            duration_seconds: r.duration_seconds,
            duration: secs2readable(r.duration_seconds),
            extra,
        })
    }
}

/// Render records as CSV text, header included (RFC 4180 quoting).
pub fn records_to_csv(records: &[SessionRecord]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        wtr.write_record(["timestamp", "kind", "duration_seconds", "duration", "extra"])?;
    }

    for r in records {
        wtr.serialize(SessionCsvRow::from_record(r)?)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| crate::errors::AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| crate::errors::AppError::Export(format!("CSV encoding error: {e}")))
}

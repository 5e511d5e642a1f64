use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current instant truncated to millisecond precision, the resolution
/// session timestamps are stored with.
pub fn now_millis() -> DateTime<Utc> {
    truncate_to_millis(Utc::now())
}

pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

/// Parse a session timestamp.
///
/// Accepted forms:
/// - RFC 3339 / ISO-8601 with offset (`2025-06-18T09:30:00Z`, `...+02:00`)
/// - naive date-time, read as UTC (`2025-06-18T09:30:00`, `2025-06-18 09:30`)
/// - epoch milliseconds (`1750239000000`)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}

/// RFC 3339 in UTC, keeping only as many fractional digits as needed.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Short local rendering used in the recent-sessions list.
pub fn format_for_display(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Date stamp (YYYY-MM-DD) used in export file names.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

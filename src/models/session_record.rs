use crate::errors::{AppError, AppResult};
use crate::models::session_kind::SessionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One completed session, as handed over by the timer engine.
///
/// Fields other than `timestamp`, `durationSeconds` and `kind` are not
/// interpreted; they are collected in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(
        default,
        with = "timestamp_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    pub duration_seconds: u64,
    #[serde(default)]
    pub kind: SessionKind,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    pub fn new(duration_seconds: u64, kind: SessionKind) -> Self {
        Self {
            timestamp: None,
            duration_seconds,
            kind,
            extra: Map::new(),
        }
    }

    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// A record is accepted only with a strictly positive duration.
    pub fn validate(&self) -> AppResult<()> {
        if self.duration_seconds == 0 {
            return Err(AppError::InvalidRecord(
                "durationSeconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Fill a missing timestamp with `now` and clamp it to millisecond precision.
    pub(crate) fn normalize_timestamp(&mut self, now: DateTime<Utc>) {
        let ts = self.timestamp.unwrap_or(now);
        self.timestamp = Some(crate::utils::date::truncate_to_millis(ts));
    }
}

/// `timestamp` is read from either an ISO-8601 string or epoch milliseconds
/// and always written as an RFC 3339 string.
mod timestamp_serde {
    use crate::utils::date::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Float(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawTimestamp>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawTimestamp::Millis(ms)) => DateTime::from_timestamp_millis(ms)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
            Some(RawTimestamp::Float(ms)) => DateTime::from_timestamp_millis(ms.round() as i64)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
            Some(RawTimestamp::Text(s)) => parse_timestamp(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {s}"))),
        }
    }
}

use crate::core::diagnostics::{record, report_warning};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{SessionKind, SessionRecord};
use crate::panel::PanelController;
use crate::store::AppendOutcome;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_timestamp;
use crate::utils::{plural_sessions, secs2readable};
use serde_json::Value;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Turn CLI arguments into a session record.
    pub fn build_record(
        duration: u64,
        kind: &str,
        at: Option<&str>,
        meta: &[String],
    ) -> AppResult<SessionRecord> {
        let mut rec = SessionRecord::new(duration, SessionKind::from_cli_str(kind));

        if let Some(raw) = at {
            let ts = parse_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp(raw.into()))?;
            rec = rec.with_timestamp(ts);
        }

        for entry in meta {
            let (key, value) = parse_meta(entry)?;
            rec = rec.with_extra(key, value);
        }

        Ok(rec)
    }

    pub fn apply(controller: &mut PanelController<DbPool>, rec: SessionRecord) -> AppResult<()> {
        let kind = rec.kind.label().to_string();
        let duration = secs2readable(rec.duration_seconds);

        match controller.record_session(rec)? {
            AppendOutcome::Suppressed => {
                info("Session logging is disabled: session not recorded.");
            }
            AppendOutcome::Appended { evicted, save } => {
                let pool = controller.store().storage();
                match save.warning() {
                    Some(w) => report_warning(pool, w),
                    None => record(
                        pool,
                        "append",
                        &kind,
                        &format!("Logged {} session ({})", kind, duration),
                    ),
                }

                success(format!(
                    "Logged {} session ({}). {} in log.",
                    kind,
                    duration,
                    plural_sessions(controller.store().len())
                ));

                if evicted > 0 {
                    info(format!(
                        "Retention: dropped {} oldest (keeping {}).",
                        plural_sessions(evicted),
                        controller.store().retention().describe()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// `key=value`; the value is taken as JSON when it parses, as text otherwise.
fn parse_meta(entry: &str) -> AppResult<(String, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| AppError::InvalidMeta(entry.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidMeta(entry.to_string()));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

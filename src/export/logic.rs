// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::writer::write_artifact;
use crate::export::{ExportFormat, notify_export_success};
use crate::panel::Confirm;
use crate::store::{KeyValueStorage, SessionLogStore};
use crate::ui::messages::info;
use crate::utils::date::date_stamp;
use chrono::NaiveDate;
use std::path::Path;

/// A downloadable export: deterministic file name plus full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub format: ExportFormat,
    pub content: String,
}

impl ExportArtifact {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// `session-log-YYYY-MM-DD.<ext>`
pub fn artifact_name(format: ExportFormat, date: NaiveDate) -> String {
    format!("session-log-{}.{}", date_stamp(date), format.as_str())
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Serialize the whole log (never just the displayed subset).
    /// Reads only: neither the log nor any settings are touched.
    pub fn build<S: KeyValueStorage>(
        store: &SessionLogStore<S>,
        format: ExportFormat,
        date: NaiveDate,
    ) -> AppResult<ExportArtifact> {
        let content = match format {
            ExportFormat::Json => store.export_as_json()?,
            ExportFormat::Csv => store.export_as_csv()?,
        };

        Ok(ExportArtifact {
            filename: artifact_name(format, date),
            format,
            content,
        })
    }

    /// Save an artifact to disk, asking before overwriting unless `force`.
    pub fn write_to(
        artifact: &ExportArtifact,
        path: &Path,
        force: bool,
        confirm: &mut dyn Confirm,
    ) -> AppResult<()> {
        ensure_writable(path, force, confirm)?;

        info(format!(
            "Exporting to {}: {}",
            artifact.format.label(),
            path.display()
        ));
        write_artifact(artifact, path)?;

        notify_export_success(artifact.format.label(), path);
        Ok(())
    }
}

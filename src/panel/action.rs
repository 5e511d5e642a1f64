//! User actions the panel understands, routed through `PanelController::dispatch`.

use crate::export::{ExportArtifact, ExportFormat};
use crate::store::SaveOutcome;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Expand,
    Collapse,
    Toggle,
    Export { format: ExportFormat, date: NaiveDate },
    Clear,
}

/// Result of a clear request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The user said no; nothing was touched.
    Declined,
    Cleared(SaveOutcome),
}

impl ClearOutcome {
    pub fn is_cleared(&self) -> bool {
        matches!(self, ClearOutcome::Cleared(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Panel state changed (or was already in the requested state when `false`).
    Panel { changed: bool },
    Exported(ExportArtifact),
    Cleared(ClearOutcome),
}

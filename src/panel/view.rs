//! Read model handed to the rendering layer.

use crate::models::{PanelSettings, SessionRecord, StorageStats};
use crate::utils::date::format_for_display;
use crate::utils::{bytes2readable, plural_sessions, secs2readable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn from_flag(expanded: bool) -> Self {
        if expanded {
            Expansion::Expanded
        } else {
            Expansion::Collapsed
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Expansion::Expanded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSessionRow {
    pub when: String,
    pub kind: String,
    pub duration: String,
}

impl RecentSessionRow {
    fn from_record(r: &SessionRecord) -> Self {
        Self {
            when: r
                .timestamp
                .as_ref()
                .map(format_for_display)
                .unwrap_or_else(|| "--".to_string()),
            kind: r.kind.label().to_string(),
            duration: secs2readable(r.duration_seconds),
        }
    }
}

/// Everything the panel shows: badge, stats line, recent list and the
/// two switches.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub expansion: Expansion,
    pub enabled: bool,
    pub badge: String,
    pub stats_text: String,
    pub recent: Vec<RecentSessionRow>,
    pub stats: StorageStats,
}

impl PanelView {
    pub fn render(settings: &PanelSettings, stats: StorageStats) -> Self {
        let stats_text = if stats.is_empty() {
            "No sessions logged yet".to_string()
        } else {
            format!(
                "{} · {} total · {}",
                plural_sessions(stats.count),
                secs2readable(stats.total_duration_seconds),
                bytes2readable(stats.approx_bytes)
            )
        };

        Self {
            expansion: Expansion::from_flag(settings.panel_expanded),
            enabled: settings.enabled,
            badge: stats.count.to_string(),
            stats_text,
            recent: stats.recent.iter().map(RecentSessionRow::from_record).collect(),
            stats,
        }
    }
}

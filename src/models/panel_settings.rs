/// Persisted state of the session log panel.
///
/// Defaults: logging enabled, panel collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSettings {
    pub enabled: bool,
    pub panel_expanded: bool,
}

pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_PANEL_EXPANDED: bool = false;

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            panel_expanded: DEFAULT_PANEL_EXPANDED,
        }
    }
}

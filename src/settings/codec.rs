//! Encode/decode `PanelSettings` as the `sessionLog` fragment.
//!
//! Writing always produces the full fragment. Reading never fails: every
//! missing or wrongly typed field falls back to its own default.

use crate::models::PanelSettings;
use crate::settings::GlobalSettings;
use serde_yaml::{Mapping, Value};

/// Key of the fragment inside the global settings object.
pub const FRAGMENT_KEY: &str = "sessionLog";

const FIELD_ENABLED: &str = "enabled";
const FIELD_PANEL_EXPANDED: &str = "panelExpanded";

/// Build the fragment: exactly `enabled` and `panelExpanded`.
pub fn serialize(settings: &PanelSettings) -> Value {
    let mut fragment = Mapping::new();
    fragment.insert(Value::from(FIELD_ENABLED), Value::Bool(settings.enabled));
    fragment.insert(
        Value::from(FIELD_PANEL_EXPANDED),
        Value::Bool(settings.panel_expanded),
    );
    Value::Mapping(fragment)
}

/// Store the fragment under `FRAGMENT_KEY`, replacing any previous one.
pub fn embed(global: &mut GlobalSettings, settings: &PanelSettings) {
    global.insert(FRAGMENT_KEY, serialize(settings));
}

pub fn deserialize(global: &GlobalSettings) -> PanelSettings {
    let defaults = PanelSettings::default();

    let Some(Value::Mapping(fragment)) = global.get(FRAGMENT_KEY) else {
        return defaults;
    };

    PanelSettings {
        enabled: read_bool(fragment, FIELD_ENABLED).unwrap_or(defaults.enabled),
        panel_expanded: read_bool(fragment, FIELD_PANEL_EXPANDED)
            .unwrap_or(defaults.panel_expanded),
    }
}

fn read_bool(fragment: &Mapping, field: &str) -> Option<bool> {
    fragment.get(field).and_then(Value::as_bool)
}

//! The host's global settings blob and the session log's slice of it.

pub mod codec;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

pub use codec::{FRAGMENT_KEY, deserialize, embed, serialize};

/// Feature name → settings fragment. Each feature reads and writes only its
/// own key; the rest of the map is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalSettings(BTreeMap<String, Value>);

impl GlobalSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, fragment: Value) -> Option<Value> {
        self.0.insert(key.into(), fragment)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a settings blob from YAML (JSON is valid YAML too).
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}

/// What the panel needs from the application shell: access to the shared
/// settings object and a way to ask for it to be written out.
pub trait SettingsHost {
    fn global_settings_mut(&mut self) -> &mut GlobalSettings;

    fn save_all_settings(&mut self) -> crate::errors::AppResult<()>;
}

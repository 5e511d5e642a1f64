use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a completed session.
///
/// Only the three canonical names map to dedicated variants; anything else is
/// kept verbatim in `Other` so unknown categories survive save/load/export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionKind {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
    Other(String),
}

impl SessionKind {
    /// Convert enum → stored string
    pub fn as_str(&self) -> &str {
        match self {
            SessionKind::Work => "work",
            SessionKind::ShortBreak => "shortBreak",
            SessionKind::LongBreak => "longBreak",
            SessionKind::Other(s) => s.as_str(),
        }
    }

    /// Helper: convert user input from CLI, accepting a few spellings.
    pub fn from_cli_str(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "work" | "w" => SessionKind::Work,
            "shortbreak" | "break" | "short" | "b" => SessionKind::ShortBreak,
            "longbreak" | "long" | "l" => SessionKind::LongBreak,
            _ => SessionKind::Other(s.trim().to_string()),
        }
    }

    /// Human-readable label for the recent-sessions list.
    pub fn label(&self) -> &str {
        match self {
            SessionKind::Work => "Work",
            SessionKind::ShortBreak => "Short break",
            SessionKind::LongBreak => "Long break",
            SessionKind::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for SessionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "work" => SessionKind::Work,
            "shortBreak" => SessionKind::ShortBreak,
            "longBreak" => SessionKind::LongBreak,
            _ => SessionKind::Other(s),
        }
    }
}

impl From<SessionKind> for String {
    fn from(kind: SessionKind) -> Self {
        match kind {
            SessionKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

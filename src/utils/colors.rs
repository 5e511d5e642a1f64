/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Green for "on", red for "off".
pub fn color_for_flag(on: bool) -> &'static str {
    if on { GREEN } else { RED }
}

/// Colored "ON"/"OFF" label.
pub fn colorize_flag(on: bool) -> String {
    let label = if on { "ON" } else { "OFF" };
    format!("{}{}{}", color_for_flag(on), label, RESET)
}

/// Grey placeholder when the value is empty, plain text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

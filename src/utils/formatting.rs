//! Formatting utilities used for CLI and export outputs.

/// Seconds → "1h 05m", "25m 00s" or "45s".
pub fn secs2readable(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Byte count → "512 B", "3.4 KB", "1.20 MB".
pub fn bytes2readable(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// "1 session" / "3 sessions"
pub fn plural_sessions(count: usize) -> String {
    if count == 1 {
        "1 session".to_string()
    } else {
        format!("{} sessions", count)
    }
}

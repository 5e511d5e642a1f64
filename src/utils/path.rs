//! Path utilities: expand ~, resolve export destinations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Where an export lands: the explicit `--file` if given (a directory gets
/// the artifact name appended), otherwise the artifact name in `cwd`.
pub fn resolve_output_path(file: Option<&str>, artifact_name: &str, cwd: &Path) -> PathBuf {
    match file {
        Some(f) => {
            let p = expand_tilde(f);
            let p = if p.is_absolute() { p } else { cwd.join(p) };
            if p.is_dir() { p.join(artifact_name) } else { p }
        }
        None => cwd.join(artifact_name),
    }
}

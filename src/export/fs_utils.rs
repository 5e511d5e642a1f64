// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::panel::Confirm;
use crate::ui::messages::{info, warning};
use std::io;
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask through `confirm`.
pub(crate) fn ensure_writable(path: &Path, force: bool, confirm: &mut dyn Confirm) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm.confirm("Overwrite?") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}

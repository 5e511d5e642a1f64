//! Warnings and audit lines: shown to the user and kept in the `log` table.

use crate::db::log::journal;
use crate::db::pool::DbPool;
use crate::errors::StoreWarning;
use crate::store::STORAGE_KEY;
use crate::ui::messages::warning;

/// Append a line to the internal log. A failing journal never aborts the
/// command; it only produces a warning.
pub fn record(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = journal(&pool.conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Show a store warning and journal it.
pub fn report_warning(pool: &DbPool, w: &StoreWarning) {
    warning(w);
    record(pool, w.operation(), STORAGE_KEY, &w.to_string());
}

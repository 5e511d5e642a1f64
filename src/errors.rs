//! Unified application error type.
//! Fatal failures across modules (config, db, store, cli) are AppError;
//! recoverable storage trouble is reported separately as `StoreWarning`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid metadata entry (expected key=value): {0}")]
    InvalidMeta(String),

    // ---------------------------
    // Session log errors
    // ---------------------------
    #[error("Invalid session record: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Non-fatal storage problems. The in-memory log stays authoritative
/// whenever one of these is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreWarning {
    #[error("Stored session log is corrupt and was ignored: {0}")]
    CorruptPayload(String),

    #[error("Failed to read session log from storage: {0}")]
    ReadFailed(String),

    #[error("Failed to save session log (kept in memory only): {0}")]
    WriteFailed(String),
}

impl StoreWarning {
    /// Short operation tag used when the warning is journaled.
    pub fn operation(&self) -> &'static str {
        match self {
            StoreWarning::CorruptPayload(_) => "load_corrupt",
            StoreWarning::ReadFailed(_) => "load_failed",
            StoreWarning::WriteFailed(_) => "save_failed",
        }
    }
}

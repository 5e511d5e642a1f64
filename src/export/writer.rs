// src/export/writer.rs

use crate::errors::AppResult;
use crate::export::ExportArtifact;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write an artifact's content verbatim to `path`.
pub(crate) fn write_artifact(artifact: &ExportArtifact, path: &Path) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all(artifact.content.as_bytes())?;
    file.flush()?;
    Ok(())
}

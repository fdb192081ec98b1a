//! File-backed diagnosis log sink.

use crate::paths::TriagePaths;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use triage_core::error::Result;
use triage_core::sink::DiagnosisLog;

/// Appends each completed diagnosis to a plain-text log file.
///
/// Entries are timestamped and separated by a blank line:
///
/// ```text
/// [2025-01-05T12:34:56+00:00]
/// Based on your answers, you may have: Flu
/// ...
/// ```
pub struct FileDiagnosisLog {
    log_file: PathBuf,
}

impl FileDiagnosisLog {
    /// Creates a log writing to the given file.
    pub fn new(log_file: impl AsRef<Path>) -> Self {
        Self {
            log_file: log_file.as_ref().to_path_buf(),
        }
    }

    /// Creates a log writing to the standard location.
    pub fn from_paths(paths: &TriagePaths) -> Self {
        Self::new(paths.log_file())
    }
}

#[async_trait]
impl DiagnosisLog for FileDiagnosisLog {
    async fn save(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.log_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let entry = format!("[{}]\n{}\n\n", chrono::Utc::now().to_rfc3339(), text);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .await?;
        file.write_all(entry.as_bytes()).await?;
        debug!(path = %self.log_file.display(), "diagnosis logged");
        Ok(())
    }
}

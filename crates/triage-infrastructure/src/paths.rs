//! Unified path management for triage data files.
//!
//! All catalog, session, and log files live under one base directory,
//! `~/.triage` by default, so every storage component agrees on where
//! data goes.

use std::path::{Path, PathBuf};
use triage_core::error::{Result, TriageError};

/// Unified path management for the triage assistant.
///
/// # Directory Structure
///
/// ```text
/// ~/.triage/                   # Base directory (overridable)
/// ├── catalog.toml             # Condition catalog (optional)
/// ├── sessions/                # One TOML file per conversation
/// │   └── <conversation>.toml
/// └── diagnosis_log.txt        # Append-only diagnosis log
/// ```
#[derive(Debug, Clone)]
pub struct TriagePaths {
    base_dir: PathBuf,
}

impl TriagePaths {
    /// Creates path management rooted at an explicit base directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates path management at the default location (`~/.triage`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| TriageError::config("cannot find home directory"))?;
        Ok(Self::new(home_dir.join(".triage")))
    }

    /// The base directory for all triage data.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the condition catalog file.
    pub fn catalog_file(&self) -> PathBuf {
        self.base_dir.join("catalog.toml")
    }

    /// Directory holding per-conversation session files.
    pub fn sessions_dir(&self) -> PathBuf {
        self.base_dir.join("sessions")
    }

    /// Path of the append-only diagnosis log.
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("diagnosis_log.txt")
    }

    /// Creates the base and sessions directories if missing.
    ///
    /// # Errors
    ///
    /// Returns an IO error if a directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.sessions_dir())?;
        Ok(())
    }
}

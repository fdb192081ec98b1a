//! TOML-based SessionStore implementation.

use crate::paths::TriagePaths;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use triage_core::error::Result;
use triage_core::session::{SessionStore, TriageSession};

/// A session store keeping one TOML file per conversation.
///
/// Sessions survive process restarts, so a triage can continue where it
/// left off. Conversation keys are sanitized into safe file names.
///
/// ```text
/// base_dir/
/// └── sessions/
///     ├── conversation-1.toml
///     └── conversation-2.toml
/// ```
pub struct TomlSessionRepository {
    sessions_dir: PathBuf,
}

impl TomlSessionRepository {
    /// Creates a store rooted at the given sessions directory, creating
    /// it if missing.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory cannot be created.
    pub fn new(sessions_dir: impl AsRef<Path>) -> Result<Self> {
        let sessions_dir = sessions_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&sessions_dir)?;
        Ok(Self { sessions_dir })
    }

    /// Creates a store at the standard location.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory cannot be created.
    pub fn from_paths(paths: &TriagePaths) -> Result<Self> {
        Self::new(paths.sessions_dir())
    }

    /// Returns the file path for a conversation key.
    fn session_file_path(&self, key: &str) -> PathBuf {
        self.sessions_dir.join(format!("{}.toml", sanitize_key(key)))
    }
}

/// Maps a conversation key to a safe file-name stem.
///
/// Alphanumerics, `-`, and `_` pass through; everything else becomes `_`.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl SessionStore for TomlSessionRepository {
    async fn get(&self, key: &str) -> Result<Option<TriageSession>> {
        let path = self.session_file_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&path).await?;
        let session: TriageSession = toml::from_str(&content)?;
        Ok(Some(session))
    }

    async fn put(&self, key: &str, session: &TriageSession) -> Result<()> {
        let path = self.session_file_path(key);
        let content = toml::to_string(session)?;
        tokio::fs::write(&path, content).await?;
        debug!(key, path = %path.display(), "session persisted");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.session_file_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

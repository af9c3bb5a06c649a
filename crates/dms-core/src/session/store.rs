//! Single-slot session id store.
//!
//! Concurrent processes are not synchronized; the last writer wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::utils;

// ─────────────────────────────────────────────
// SessionStore
// ─────────────────────────────────────────────

/// Durable storage for the active session id, backed by one file.
#[derive(Clone, Debug)]
pub struct SessionStore {
    /// File holding the session id.
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(utils::get_session_file_path())
    }
}

impl SessionStore {
    /// Create a store backed by `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session id.
    ///
    /// Returns `Ok(None)` if the file is missing or blank. Content is trimmed.
    pub fn load(&self) -> std::io::Result<Option<String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let id = content.trim();
        if id.is_empty() {
            debug!(path = %self.path.display(), "Session file is empty");
            Ok(None)
        } else {
            Ok(Some(id.to_string()))
        }
    }

    /// Overwrite the file with exactly `session_id`.
    pub fn save(&self, session_id: &str) -> std::io::Result<()> {
        std::fs::write(&self.path, session_id)?;
        debug!(path = %self.path.display(), session = %session_id, "Session id saved");
        Ok(())
    }

    /// Delete the file. A missing file is not an error.
    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

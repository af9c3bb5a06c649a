//! Utility helpers: path resolution.

use std::path::PathBuf;

/// File name of the persisted session id, relative to the home directory.
pub const SESSION_FILE_NAME: &str = ".dms_session";

/// The user's home directory, or `.` when it cannot be determined.
pub fn home_dir() -> PathBuf {
    dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Default location of the session file (e.g. `~/.dms_session`).
pub fn get_session_file_path() -> PathBuf {
    home_dir().join(SESSION_FILE_NAME)
}

//! Centralized path definitions for tomctl
//!
//! This module provides a single source of truth for all filesystem paths
//! used by tomctl.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.tomctl/
//! ├── config.toml               # Backend URL, timeouts, retry policy
//! └── session.toml              # Current session (owner-readable only)
//! ```
//!
//! Set `TOMCTL_HOME` to relocate the whole directory.

use std::path::PathBuf;

/// Environment variable overriding the application directory
pub const HOME_ENV: &str = "TOMCTL_HOME";

/// Application directory name under the user's home
const APP_DIR: &str = ".tomctl";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Session filename
const SESSION_FILE: &str = "session.toml";

/// Get the tomctl directory.
///
/// Returns `$TOMCTL_HOME` when set, otherwise `~/.tomctl/`.
#[must_use]
pub fn app_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(APP_DIR)
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

/// Get the session file path.
#[must_use]
pub fn session_file() -> PathBuf {
    app_dir().join(SESSION_FILE)
}

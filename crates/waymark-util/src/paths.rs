//! Default paths for waymark components
//!
//! Paths are user-writable by default (no root required):
//! - Data: `$XDG_DATA_HOME/waymark` or `~/.local/share/waymark`
//! - Logs: `$XDG_STATE_HOME/waymark` or `~/.local/state/waymark`

use std::path::PathBuf;

/// Environment variable for overriding the data directory
pub const WAYMARK_DATA_DIR_ENV: &str = "WAYMARK_DATA_DIR";

/// Application subdirectory name
const APP_DIR: &str = "waymark";

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$WAYMARK_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/waymark` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/waymark` (fallback)
pub fn default_data_dir() -> PathBuf {
    // Check environment override first
    if let Ok(path) = std::env::var(WAYMARK_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    data_dir_without_env()
}

/// Get the data directory without checking WAYMARK_DATA_DIR env var.
pub fn data_dir_without_env() -> PathBuf {
    // Try XDG_DATA_HOME first
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    // Fallback to ~/.local/share/waymark
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}

/// Get the default log directory.
///
/// Order of precedence:
/// 1. `$XDG_STATE_HOME/waymark` (if XDG_STATE_HOME is set)
/// 2. `~/.local/state/waymark` (fallback)
pub fn default_log_dir() -> PathBuf {
    // Try XDG_STATE_HOME first
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        return PathBuf::from(state_home).join(APP_DIR);
    }

    // Fallback to ~/.local/state/waymark
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("state")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("logs")
}

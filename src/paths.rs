//! XDG-style path utilities for configuration and data directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use std::path::PathBuf;

/// Returns the configuration directory for locman.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/locman` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/locman` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("locman"),
        |xdg| PathBuf::from(xdg).join("locman"),
    )
}

/// Returns the data directory for locman, where the default corpus
/// database lives.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/locman` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/locman` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME").map_or_else(
        |_| home_dir().join(".local").join("share").join("locman"),
        |xdg| PathBuf::from(xdg).join("locman"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

// GlassView platform paths for macOS
// Config: ~/Library/Application Support/GlassView

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for GlassView on macOS.
/// `~/Library/Application Support/GlassView`
pub fn get_config_dir() -> PathBuf {
    get_home_dir()
        .join("Library")
        .join("Application Support")
        .join("GlassView")
}

/// Returns the user's home directory on macOS.
pub fn get_home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/Users/Shared")))
}

// GlassView platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for GlassView.
///
/// - **Linux**: `~/.config/glassview` (or `$XDG_CONFIG_HOME/glassview`)
/// - **macOS**: `~/Library/Application Support/GlassView`
/// - **Windows**: `%APPDATA%/GlassView`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the user's home directory, used as the default starting
/// directory for file dialogs.
pub fn get_home_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_home_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_home_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_home_dir()
    }
}

// GlassView platform paths for Windows
// Config: %APPDATA%/GlassView

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for GlassView on Windows.
/// `%APPDATA%/GlassView`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("GlassView")
}

/// Returns the user's home directory on Windows.
/// `%USERPROFILE%`, falling back to `%HOMEDRIVE%%HOMEPATH%`.
pub fn get_home_dir() -> PathBuf {
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.is_empty() {
            return PathBuf::from(profile);
        }
    }
    let drive = env::var("HOMEDRIVE").unwrap_or_else(|_| String::from("C:"));
    let path = env::var("HOMEPATH").unwrap_or_else(|_| String::from("\\Users\\Default"));
    PathBuf::from(format!("{}{}", drive, path))
}

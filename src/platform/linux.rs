// GlassView platform paths for Linux
// Config: $XDG_CONFIG_HOME/glassview (falls back to ~/.config/glassview)

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for GlassView on Linux.
/// `$XDG_CONFIG_HOME/glassview` or `~/.config/glassview`
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("glassview");
        }
    }
    get_home_dir().join(".config").join("glassview")
}

/// Returns the user's home directory on Linux.
pub fn get_home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/root")))
}

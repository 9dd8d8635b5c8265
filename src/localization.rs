// GlassView localization
// A flat string table for the shell's few user-visible strings, with
// built-in defaults, override merging, and JSON file loading.

use std::collections::HashMap;
use std::path::Path;

use crate::types::errors::LocaleError;

/// Localized strings used by the shell.
pub struct Localization {
    strings: HashMap<String, String>,
}

impl Localization {
    /// A table pre-filled with the default (English) strings.
    pub fn new() -> Self {
        let mut strings = HashMap::new();
        strings.insert(
            "global.quit_confirmation".to_string(),
            "Do you want to close the window?".to_string(),
        );
        strings.insert(
            "dialog.filter.all_files".to_string(),
            "All files".to_string(),
        );
        strings.insert("window.default_title".to_string(), "GlassView".to_string());
        Self { strings }
    }

    /// Looks up a string, falling back to the key itself when missing.
    pub fn get(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Overlays `overrides` onto the table.
    pub fn merge(&mut self, overrides: HashMap<String, String>) {
        self.strings.extend(overrides);
    }

    /// Loads overrides from a JSON file of `{"key": "string"}` pairs.
    pub fn load_file(&mut self, path: &Path) -> Result<(), LocaleError> {
        if !path.exists() {
            return Err(LocaleError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| LocaleError::ParseError(e.to_string()))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| LocaleError::ParseError(e.to_string()))?;
        self.merge(overrides);
        Ok(())
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.strings.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new()
    }
}

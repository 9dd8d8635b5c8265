// GlassView shell configuration
// Manages shell config: loading, saving, updating individual values, and
// resetting to defaults. Stored as a JSON file at the platform-specific
// config path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::window::WindowOptions;

/// Persisted shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowOptions,
    /// Enable verbose shell logging.
    pub debug: bool,
}

/// Trait defining the config store interface.
pub trait ConfigStore {
    fn load(&mut self) -> Result<ShellConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get_config(&self) -> &ShellConfig;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), ConfigError>;
    fn reset(&mut self) -> Result<(), ConfigError>;
    fn get_config_path(&self) -> &str;
}

/// Config store implementation that persists the config as JSON on disk.
pub struct FileConfigStore {
    config_path: String,
    config: ShellConfig,
}

impl FileConfigStore {
    /// Creates a new FileConfigStore.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with
    /// `config.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("config.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            config: ShellConfig::default(),
        }
    }
}

impl ConfigStore for FileConfigStore {
    /// Loads the config from the JSON file.
    ///
    /// If the file does not exist, returns the defaults.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<ShellConfig, ConfigError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.config = ShellConfig::default();
            return Ok(self.config.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        let config: ShellConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.config = config;
        Ok(self.config.clone())
    }

    /// Saves the current config to the JSON file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_config(&self) -> &ShellConfig {
        &self.config
    }

    /// Updates an individual value by dot-notation key path.
    ///
    /// Converts the current config to a `serde_json::Value`, navigates
    /// the dot-separated key path, updates the target value, then
    /// deserializes back into `ShellConfig`. Saves to disk after a
    /// successful update.
    ///
    /// # Examples
    /// - `"window.title"` → updates `config.window.title`
    /// - `"window.min_size"` → updates `config.window.min_size`
    /// - `"debug"` → updates `config.debug`
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut root = serde_json::to_value(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to convert config: {}", e))
        })?;

        let parts: Vec<&str> = key.split('.').collect();
        let mut target = &mut root;
        for part in &parts[..parts.len() - 1] {
            target = target
                .get_mut(*part)
                .ok_or_else(|| ConfigError::InvalidKey(key.to_string()))?;
        }

        let last = parts[parts.len() - 1];
        match target.as_object_mut() {
            Some(obj) if obj.contains_key(last) => {
                obj.insert(last.to_string(), value);
            }
            _ => return Err(ConfigError::InvalidKey(key.to_string())),
        }

        let updated: ShellConfig = serde_json::from_value(root).map_err(|e| {
            ConfigError::InvalidValue(format!("Value does not fit key {}: {}", key, e))
        })?;

        self.config = updated;
        self.save()
    }

    /// Resets the config to defaults and persists it.
    fn reset(&mut self) -> Result<(), ConfigError> {
        self.config = ShellConfig::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of native file dialog to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogType {
    Open,
    Save,
    Folder,
}

/// A file-type filter shown in open/save dialogs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileFilter {
    /// Human-readable description, e.g. "Images".
    pub description: String,
    /// Extension tokens. Accepted in `png`, `.png`, or `*.png` form;
    /// `normalized_extensions` strips the decoration.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(description: &str, extensions: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Extensions with `*.`/`.` prefixes stripped and empty or pure
    /// wildcard tokens removed. An empty result means "all files".
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| {
                e.trim()
                    .trim_start_matches('*')
                    .trim_start_matches('.')
                    .to_string()
            })
            .filter(|e| !e.is_empty() && e != "*")
            .collect()
    }
}

/// Request shape for a native file dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileDialogRequest {
    pub dialog_type: DialogType,
    /// Initial directory. `None` falls back to the user's home directory.
    pub directory: Option<PathBuf>,
    /// Allow selecting multiple files (open dialogs only).
    pub allow_multiple: bool,
    /// Pre-filled file name (save dialogs only).
    pub save_filename: String,
    pub filters: Vec<FileFilter>,
}

impl FileDialogRequest {
    /// An open-file dialog request.
    pub fn open(allow_multiple: bool) -> Self {
        Self {
            dialog_type: DialogType::Open,
            directory: None,
            allow_multiple,
            save_filename: String::new(),
            filters: Vec::new(),
        }
    }

    /// A save-file dialog request with a suggested file name.
    pub fn save(save_filename: &str) -> Self {
        Self {
            dialog_type: DialogType::Save,
            directory: None,
            allow_multiple: false,
            save_filename: save_filename.to_string(),
            filters: Vec::new(),
        }
    }

    /// A folder-picker dialog request.
    pub fn folder() -> Self {
        Self {
            dialog_type: DialogType::Folder,
            directory: None,
            allow_multiple: false,
            save_filename: String::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_directory(mut self, directory: PathBuf) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// The directory the dialog should start in: the requested one, or
    /// the user's home directory when none was given.
    pub fn effective_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(crate::platform::get_home_dir)
    }
}

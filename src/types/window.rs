use serde::{Deserialize, Serialize};

use crate::types::errors::WindowError;

/// Parameters for creating the webview window.
///
/// Mirrors the full parameter surface of the shell: title, start URL,
/// size, resizability, fullscreen flag, minimum size, confirm-on-quit
/// flag, and background color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,
    /// Initial URL to navigate to. `None` shows a blank page until
    /// `load_url` or `load_html` is called.
    pub url: Option<String>,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub fullscreen: bool,
    /// Minimum client size as `(width, height)`.
    pub min_size: (u32, u32),
    /// Ask for confirmation before closing the window.
    pub confirm_quit: bool,
    /// Window background as a `#RRGGBB` hex string, shown before and
    /// behind page content.
    pub background_color: String,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "GlassView".to_string(),
            url: None,
            width: 800,
            height: 600,
            resizable: true,
            fullscreen: false,
            min_size: (200, 100),
            confirm_quit: false,
            background_color: "#FFFFFF".to_string(),
        }
    }
}

impl WindowOptions {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_size = (width, height);
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_confirm_quit(mut self, confirm_quit: bool) -> Self {
        self.confirm_quit = confirm_quit;
        self
    }

    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    /// Validates the options: background color must parse and the start
    /// URL, when present, must be an absolute URL.
    pub fn validate(&self) -> Result<(), WindowError> {
        parse_hex_color(&self.background_color)?;
        if let Some(ref url) = self.url {
            url::Url::parse(url).map_err(|_| WindowError::InvalidUrl(url.clone()))?;
        }
        Ok(())
    }
}

/// Parses a `#RRGGBB` hex string into an RGBA tuple (alpha is always 255).
///
/// The leading `#` is required and components are case-insensitive.
pub fn parse_hex_color(value: &str) -> Result<(u8, u8, u8, u8), WindowError> {
    let invalid = || WindowError::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
    Ok((r, g, b, 255))
}

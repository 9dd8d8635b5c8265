//! GlassView — a webview window shell with a JSON call bridge between
//! hosted script and Rust.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod bridge;
pub mod config;
pub mod localization;
pub mod platform;
pub mod script;
pub mod types;

#[cfg(feature = "gui")]
pub mod dialogs;

#[cfg(feature = "gui")]
pub mod ui;

#[cfg(feature = "gui")]
pub use ui::shell::{
    create_file_dialog, create_window, destroy_window, evaluate_js, evaluate_js_with_timeout,
    get_current_url, load_html, load_url, set_js_api, toggle_fullscreen, wait_ready,
};

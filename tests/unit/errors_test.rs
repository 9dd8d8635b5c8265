//! Unit tests for the error types: Display output and Error trait wiring.

use std::error::Error;

use glassview::types::errors::{
    BridgeError, ConfigError, LocaleError, ScriptError, WindowError,
};

// ─── BridgeError ───

#[test]
fn test_bridge_error_display() {
    let e = BridgeError::NotFound("save_file".to_string());
    assert_eq!(e.to_string(), "Function save_file() does not exist");

    let e = BridgeError::Callback("boom".to_string());
    assert!(e.to_string().contains("boom"));

    let e = BridgeError::InvalidPayload("missing id".to_string());
    assert!(e.to_string().contains("missing id"));
}

#[test]
fn test_bridge_error_is_std_error() {
    let e: Box<dyn Error> = Box::new(BridgeError::NotFound("x".to_string()));
    assert!(e.source().is_none());
}

// ─── ScriptError ───

#[test]
fn test_script_error_display() {
    assert_eq!(ScriptError::Timeout.to_string(), "Script evaluation timed out");
    assert_eq!(
        ScriptError::Cancelled.to_string(),
        "Script evaluation cancelled"
    );
    assert!(ScriptError::InvalidResult("bad json".to_string())
        .to_string()
        .contains("bad json"));
}

// ─── WindowError ───

#[test]
fn test_window_error_display() {
    assert!(WindowError::NotCreated.to_string().contains("No webview window"));
    assert!(WindowError::AlreadyRunning.to_string().contains("already running"));
    assert!(WindowError::InvalidColor("#ZZZ".to_string())
        .to_string()
        .contains("#ZZZ"));
    assert!(WindowError::InvalidUrl("not a url".to_string())
        .to_string()
        .contains("not a url"));
    assert!(WindowError::EventLoopClosed.to_string().contains("closed"));
}

// ─── ConfigError ───

#[test]
fn test_config_error_display() {
    assert!(ConfigError::IoError("denied".to_string())
        .to_string()
        .contains("denied"));
    assert!(ConfigError::SerializationError("eof".to_string())
        .to_string()
        .contains("eof"));
    assert!(ConfigError::InvalidKey("window.nope".to_string())
        .to_string()
        .contains("window.nope"));
    assert!(ConfigError::InvalidValue("wrong type".to_string())
        .to_string()
        .contains("wrong type"));
}

// ─── LocaleError ───

#[test]
fn test_locale_error_display() {
    assert!(LocaleError::FileNotFound("/tmp/x.json".to_string())
        .to_string()
        .contains("/tmp/x.json"));
    assert!(LocaleError::ParseError("unexpected token".to_string())
        .to_string()
        .contains("unexpected token"));
}

//! Unit tests for window options: defaults, builder methods, validation,
//! and background-color parsing.

use rstest::rstest;

use glassview::types::errors::WindowError;
use glassview::types::window::{parse_hex_color, WindowOptions};

// ─── Defaults ───

#[test]
fn test_default_options() {
    let options = WindowOptions::default();
    assert_eq!(options.title, "GlassView");
    assert_eq!(options.url, None);
    assert_eq!((options.width, options.height), (800, 600));
    assert!(options.resizable);
    assert!(!options.fullscreen);
    assert_eq!(options.min_size, (200, 100));
    assert!(!options.confirm_quit);
    assert_eq!(options.background_color, "#FFFFFF");
}

#[test]
fn test_defaults_validate() {
    assert!(WindowOptions::default().validate().is_ok());
}

// ─── Builder ───

#[test]
fn test_builder_methods() {
    let options = WindowOptions::new("My App")
        .with_url("https://example.com")
        .with_size(1280, 720)
        .with_min_size(400, 300)
        .with_resizable(false)
        .with_fullscreen(true)
        .with_confirm_quit(true)
        .with_background_color("#1c2128");

    assert_eq!(options.title, "My App");
    assert_eq!(options.url.as_deref(), Some("https://example.com"));
    assert_eq!((options.width, options.height), (1280, 720));
    assert_eq!(options.min_size, (400, 300));
    assert!(!options.resizable);
    assert!(options.fullscreen);
    assert!(options.confirm_quit);
    assert_eq!(options.background_color, "#1c2128");
    assert!(options.validate().is_ok());
}

// ─── Validation ───

#[test]
fn test_validate_rejects_bad_color() {
    let options = WindowOptions::default().with_background_color("white");
    assert!(matches!(
        options.validate(),
        Err(WindowError::InvalidColor(_))
    ));
}

#[test]
fn test_validate_rejects_relative_url() {
    let options = WindowOptions::default().with_url("some/relative/path.html");
    assert!(matches!(options.validate(), Err(WindowError::InvalidUrl(_))));
}

#[rstest]
#[case("https://example.com/index.html")]
#[case("http://localhost:8080")]
#[case("file:///home/user/page.html")]
#[case("gv://localhost/")]
fn test_validate_accepts_absolute_urls(#[case] url: &str) {
    let options = WindowOptions::default().with_url(url);
    assert!(options.validate().is_ok(), "{} should validate", url);
}

// ─── Hex color parsing ───

#[rstest]
#[case("#FFFFFF", (255, 255, 255, 255))]
#[case("#000000", (0, 0, 0, 255))]
#[case("#1c2128", (28, 33, 40, 255))]
#[case("#A1B2C3", (161, 178, 195, 255))]
#[case("#a1b2c3", (161, 178, 195, 255))]
fn test_parse_hex_color_valid(#[case] input: &str, #[case] expected: (u8, u8, u8, u8)) {
    assert_eq!(parse_hex_color(input).unwrap(), expected);
}

#[rstest]
#[case("FFFFFF")] // missing '#'
#[case("#FFF")] // shorthand not accepted
#[case("#FFFFFFFF")] // too long
#[case("#GGGGGG")] // not hex
#[case("")]
#[case("#")]
fn test_parse_hex_color_invalid(#[case] input: &str) {
    let err = parse_hex_color(input).unwrap_err();
    assert!(matches!(err, WindowError::InvalidColor(_)));
    assert!(err.to_string().contains(input));
}

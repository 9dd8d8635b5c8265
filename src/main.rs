//! GlassView — a webview window shell with a JSON call bridge.
//!
//! Entry point: opens a demo window with a small registered API and a
//! demo page exercising the bridge. When built without the `gui`
//! feature, runs an interactive console demo of the testable components.

#[cfg(feature = "gui")]
fn main() {
    use std::time::Duration;

    use serde_json::json;
    use tracing_subscriber::EnvFilter;

    use glassview::bridge::ApiRegistry;
    use glassview::config::{ConfigStore, FileConfigStore};
    use glassview::types::errors::BridgeError;

    let mut store = FileConfigStore::new(None);
    let config = store.load().unwrap_or_default();

    let default_filter = if config.debug { "glassview=debug" } else { "glassview=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
    let mut options = config.window.clone();
    if options.title == "GlassView" {
        options.title = "GlassView Demo".to_string();
    }

    let mut api = ApiRegistry::new();
    api.register("echo", |param| Ok(param.unwrap_or(serde_json::Value::Null)));
    api.register("sum", |param| {
        let values = param
            .as_ref()
            .and_then(|p| p.as_array())
            .ok_or_else(|| BridgeError::Callback("sum expects an array".to_string()))?;
        let total: f64 = values.iter().filter_map(|v| v.as_f64()).sum();
        Ok(json!(total))
    });
    api.register("version", |_| Ok(json!(env!("CARGO_PKG_VERSION"))));
    api.register("home_dir", |_| {
        Ok(json!(glassview::platform::get_home_dir()
            .display()
            .to_string()))
    });

    let demo_html = include_str!("../resources/demo.html");
    std::thread::spawn(move || {
        // The window handle appears once create_window has built the shell
        for _ in 0..100 {
            if glassview::wait_ready(Duration::from_millis(100)).unwrap_or(false) {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        if let Err(e) = glassview::load_html(demo_html, None) {
            eprintln!("Failed to load demo page: {}", e);
        }
    });

    if let Err(e) = glassview::create_window(options, Some(api)) {
        eprintln!("Failed to create window: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               GlassView v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║      Webview shell with a JSON call bridge                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_options();
    demo_bridge();
    demo_script();
    demo_config();
    demo_localization();
    demo_dialog_requests();
    demo_platform();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("  Build with the `gui` feature for the webview window.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_options() {
    use glassview::types::window::{parse_hex_color, WindowOptions};
    section("Window Options");

    let options = WindowOptions::new("Demo")
        .with_size(1024, 768)
        .with_min_size(320, 240)
        .with_background_color("#1c2128")
        .with_confirm_quit(true);
    options.validate().expect("Options should validate");
    println!("  Title: {}", options.title);
    println!("  Size: {}x{} (min {}x{})", options.width, options.height, options.min_size.0, options.min_size.1);
    let rgba = parse_hex_color(&options.background_color).unwrap();
    println!("  Background {} -> rgba{:?}", options.background_color, rgba);
    println!("  ✓ WindowOptions OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_bridge() {
    use glassview::bridge::{bootstrap_script, dispatch, parse_call, ApiRegistry, JsApi};
    use serde_json::json;
    section("JSON Call Bridge");

    let mut api = ApiRegistry::new();
    api.register("greet", |param| {
        let name = param
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
            .unwrap_or("world");
        Ok(json!(format!("Hello, {}!", name)))
    });
    println!("  Registered functions: {:?}", api.names());

    let call = parse_call(r#"{"id":"c1","method":"greet","params":{"name":"GlassView"}}"#).unwrap();
    let result = dispatch(&api, &call).unwrap();
    println!("  greet(...) -> {}", result);

    let missing = parse_call(r#"{"id":"c2","method":"nope","params":null}"#).unwrap();
    println!("  nope(...) -> {}", dispatch(&api, &missing).unwrap_err());

    let script = bootstrap_script(&api);
    println!("  Bootstrap script: {} bytes", script.len());
    println!("  ✓ Bridge OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_script() {
    use std::time::Duration;

    use glassview::script::{escape_js_string, PendingResults};
    use serde_json::json;
    section("Script Evaluation Plumbing");

    let pending = PendingResults::new();
    let (token, slot) = pending.insert();
    println!("  Registered evaluation {}", &token[..8]);

    let worker = {
        let pending = pending.clone();
        std::thread::spawn(move || {
            if let Some(slot) = pending.take(&token) {
                slot.fulfill(Ok(json!(42)));
            }
        })
    };
    let value = slot.wait(Duration::from_secs(1)).unwrap();
    worker.join().unwrap();
    println!("  Blocking wait resolved to {}", value);

    let escaped = escape_js_string("line\n\"quoted\"");
    println!("  Escaped literal: \"{}\"", escaped);
    println!("  ✓ Script plumbing OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_config() {
    use glassview::config::{ConfigStore, FileConfigStore};
    use serde_json::json;
    section("Shell Config");

    let dir = std::env::temp_dir().join("glassview-demo");
    let path = dir.join("config.json");
    let mut store = FileConfigStore::new(Some(path.to_string_lossy().to_string()));
    let config = store.load().unwrap();
    println!("  Window title: {}", config.window.title);
    println!("  Debug: {}", config.debug);

    store.set_value("window.title", json!("Configured")).unwrap();
    println!("  Changed window.title to: {}", store.get_config().window.title);
    store.reset().unwrap();
    let _ = std::fs::remove_dir_all(&dir);
    println!("  ✓ Config store OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_localization() {
    use glassview::localization::Localization;
    section("Localization");

    let mut strings = Localization::new();
    println!("  Quit prompt: {}", strings.get("global.quit_confirmation"));
    let mut overrides = std::collections::HashMap::new();
    overrides.insert(
        "global.quit_confirmation".to_string(),
        "Wirklich beenden?".to_string(),
    );
    strings.merge(overrides);
    println!("  After merge: {}", strings.get("global.quit_confirmation"));
    println!("  Missing key falls back: {}", strings.get("no.such.key"));
    println!("  ✓ Localization OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_dialog_requests() {
    use glassview::types::dialog::{FileDialogRequest, FileFilter};
    section("File Dialog Requests");

    let open = FileDialogRequest::open(true)
        .with_filter(FileFilter::new("Images", &["*.png", ".jpg", "gif"]));
    println!("  Open dialog, multi-select: {}", open.allow_multiple);
    println!(
        "  Filter 'Images' normalizes to {:?}",
        open.filters[0].normalized_extensions()
    );
    println!("  Starts in: {}", open.effective_directory().display());

    let save = FileDialogRequest::save("export.json");
    println!("  Save dialog pre-filled name: {}", save.save_filename);
    println!("  ✓ Dialog requests OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_platform() {
    use glassview::platform;
    section("Platform Paths");

    println!("  Config dir: {}", platform::get_config_dir().display());
    println!("  Home dir: {}", platform::get_home_dir().display());
    println!("  ✓ Platform OK");
    println!();
}

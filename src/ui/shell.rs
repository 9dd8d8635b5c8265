//! Webview window shell built on `wry` + `tao`.
//!
//! Architecture:
//! - `create_window` builds the window + webview on the calling thread
//!   and runs the native message loop there; it does not return.
//! - Every other operation can be called from any thread. Control
//!   messages are marshalled onto the UI thread through the event-loop
//!   proxy as [`ShellEvent`] values.
//! - Hosted script reaches Rust via `window.ipc.postMessage()`; replies
//!   and injected scripts travel back through `evaluate_script`.
//! - `load_html` content is served through the `gv://` custom protocol
//!   so the page gets a stable origin.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use serde_json::Value;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::window::{Fullscreen, WindowBuilder};
use tracing::{debug, error, warn};
use wry::{PageLoadEvent, WebViewBuilder};

use crate::bridge::{self, ApiRegistry, JsApi};
use crate::dialogs;
use crate::localization::Localization;
use crate::script::{parse_eval_result, PendingResults, EVAL_TIMEOUT};
use crate::types::dialog::FileDialogRequest;
use crate::types::errors::{ScriptError, WindowError};
use crate::types::window::{parse_hex_color, WindowOptions};

/// Control messages marshalled onto the UI thread.
enum ShellEvent {
    LoadUrl(String),
    LoadHtml(String),
    /// Fire-and-forget script (bridge replies, bootstrap injection).
    Script(String),
    /// Blocking evaluation; the result is delivered to the pending slot
    /// registered under `token`.
    EvalScript { token: String, script: String },
    SetApi(Arc<dyn JsApi>),
    ToggleFullscreen,
    Destroy,
}

/// Flag set once the webview has finished its first load.
struct ReadyFlag {
    flag: Mutex<bool>,
    ready: Condvar,
}

impl ReadyFlag {
    fn new() -> Self {
        Self {
            flag: Mutex::new(false),
            ready: Condvar::new(),
        }
    }

    fn set(&self) {
        let mut flag = self.flag.lock().unwrap();
        *flag = true;
        self.ready.notify_all();
    }

    fn wait(&self, timeout: Duration) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        let mut flag = self.flag.lock().unwrap();
        while !*flag {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            if remaining.is_zero() {
                return false;
            }
            let (guard, _) = self.ready.wait_timeout(flag, remaining).unwrap();
            flag = guard;
        }
        true
    }
}

/// State shared between the UI thread and callers on other threads.
struct SharedState {
    current_url: Mutex<Option<String>>,
    ready: ReadyFlag,
    api: Mutex<Option<Arc<dyn JsApi>>>,
    pending: PendingResults,
    /// Content served by the `gv://` protocol for `load_html`.
    html: Mutex<Option<String>>,
}

impl SharedState {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            current_url: Mutex::new(None),
            ready: ReadyFlag::new(),
            api: Mutex::new(None),
            pending: PendingResults::new(),
            html: Mutex::new(None),
        })
    }
}

/// Handle to the live window, reachable from any thread.
#[derive(Clone)]
struct ShellHandle {
    proxy: EventLoopProxy<ShellEvent>,
    shared: Arc<SharedState>,
}

static ACTIVE: Mutex<Option<ShellHandle>> = Mutex::new(None);

fn handle() -> Result<ShellHandle, WindowError> {
    ACTIVE
        .lock()
        .unwrap()
        .clone()
        .ok_or(WindowError::NotCreated)
}

fn send(event: ShellEvent) -> Result<(), WindowError> {
    handle()?
        .proxy
        .send_event(event)
        .map_err(|_| WindowError::EventLoopClosed)
}

const BLANK_PAGE: &str = "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head><body></body></html>";
const HTML_URL: &str = "gv://localhost/";

/// Creates the webview window and runs the native message loop on the
/// calling thread.
///
/// Returns only when setup fails; once the loop is running the call
/// never returns, and closing the window ends the process. All other
/// module functions may be called from other threads while the loop
/// runs.
pub fn create_window(
    options: WindowOptions,
    api: Option<ApiRegistry>,
) -> Result<(), WindowError> {
    options.validate()?;
    if ACTIVE.lock().unwrap().is_some() {
        return Err(WindowError::AlreadyRunning);
    }

    let background = parse_hex_color(&options.background_color)?;
    let strings = Localization::new();
    let shared = SharedState::new();
    if let Some(registry) = api {
        *shared.api.lock().unwrap() = Some(Arc::new(registry));
    }

    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let mut window_builder = WindowBuilder::new()
        .with_title(&options.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            options.width as f64,
            options.height as f64,
        ))
        .with_min_inner_size(tao::dpi::LogicalSize::new(
            options.min_size.0 as f64,
            options.min_size.1 as f64,
        ))
        .with_resizable(options.resizable);
    if !options.resizable {
        // Fixed border also means no maximize, as on a fixed-single form
        window_builder = window_builder.with_maximizable(false);
    }
    if options.fullscreen {
        window_builder = window_builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let window = window_builder
        .build(&event_loop)
        .map_err(|_| WindowError::EventLoopClosed)?;

    let protocol_shared = shared.clone();
    let ipc_shared = shared.clone();
    let ipc_proxy = proxy.clone();
    let nav_shared = shared.clone();
    let load_shared = shared.clone();
    let load_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let mut builder = WebViewBuilder::new()
        .with_background_color(background)
        .with_custom_protocol("gv".into(), move |_wv_id, _request| {
            let html = protocol_shared
                .html
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| BLANK_PAGE.to_string());
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let reply = handle_ipc(&ipc_shared, msg.body());
            if let Some(script) = reply {
                let _ = ipc_proxy.send_event(ShellEvent::Script(script));
            }
        })
        .with_navigation_handler(move |url: String| {
            debug!(%url, "navigating");
            *nav_shared.current_url.lock().unwrap() = Some(url);
            true
        })
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                *load_shared.current_url.lock().unwrap() = Some(url);
                // Re-install the bridge on every page so navigations
                // (including gv:// pages, where the initialization
                // script does not run on all platforms) keep their API.
                if let Some(ref api) = *load_shared.api.lock().unwrap() {
                    let _ = load_proxy.send_event(ShellEvent::Script(bridge::bootstrap_script(
                        api.as_ref(),
                    )));
                }
                load_shared.ready.set();
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(ShellEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    if let Some(ref api) = *shared.api.lock().unwrap() {
        builder = builder.with_initialization_script(bridge::bootstrap_script(api.as_ref()));
    }

    builder = match options.url {
        Some(ref url) => builder.with_url(url.clone()),
        None => builder.with_url(HTML_URL),
    };

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or(WindowError::EventLoopClosed)?;
        builder
            .build_gtk(vbox)
            .map_err(|_| WindowError::EventLoopClosed)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&window)
        .map_err(|_| WindowError::EventLoopClosed)?;

    *ACTIVE.lock().unwrap() = Some(ShellHandle {
        proxy,
        shared: shared.clone(),
    });

    let confirm_quit = options.confirm_quit;
    let title = options.title.clone();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if confirm_quit
                    && !dialogs::confirm(&title, &strings.get("global.quit_confirmation"))
                {
                    return;
                }
                shutdown(&shared);
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(shell_event) => match shell_event {
                ShellEvent::LoadUrl(url) => {
                    debug!(%url, "load_url");
                    if let Err(e) = webview.load_url(&url) {
                        error!("Failed to load URL: {}", e);
                    }
                }
                ShellEvent::LoadHtml(content) => {
                    *shared.html.lock().unwrap() = Some(content);
                    if let Err(e) = webview.load_url(HTML_URL) {
                        error!("Failed to load HTML page: {}", e);
                    }
                }
                ShellEvent::Script(script) => {
                    if let Err(e) = webview.evaluate_script(&script) {
                        warn!("Script injection failed: {}", e);
                    }
                }
                ShellEvent::EvalScript { token, script } => {
                    let pending = shared.pending.clone();
                    let callback_token = token.clone();
                    let result = webview.evaluate_script_with_callback(&script, move |raw| {
                        if let Some(slot) = pending.take(&callback_token) {
                            slot.fulfill(parse_eval_result(&raw));
                        }
                    });
                    if let Err(e) = result {
                        warn!("Script evaluation failed to start: {}", e);
                        if let Some(slot) = shared.pending.take(&token) {
                            slot.fulfill(Err(ScriptError::Cancelled));
                        }
                    }
                }
                ShellEvent::SetApi(api) => {
                    let script = bridge::bootstrap_script(api.as_ref());
                    *shared.api.lock().unwrap() = Some(api);
                    if let Err(e) = webview.evaluate_script(&script) {
                        warn!("Bridge bootstrap injection failed: {}", e);
                    }
                }
                ShellEvent::ToggleFullscreen => {
                    if window.fullscreen().is_some() {
                        window.set_fullscreen(None);
                    } else {
                        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                    }
                }
                ShellEvent::Destroy => {
                    shutdown(&shared);
                    *control_flow = ControlFlow::Exit;
                }
            },

            _ => {}
        }
    });
}

/// Cancels in-flight evaluations and releases the global handle.
fn shutdown(shared: &Arc<SharedState>) {
    shared.pending.cancel_all();
    ACTIVE.lock().unwrap().take();
}

/// Handles one IPC message from the page; returns the reply script.
fn handle_ipc(shared: &Arc<SharedState>, body: &str) -> Option<String> {
    let call = match bridge::parse_call(body) {
        Ok(call) => call,
        Err(e) => {
            error!("{}", e);
            return None;
        }
    };

    let api = shared.api.lock().unwrap().clone();
    let outcome = match api {
        Some(api) => bridge::dispatch(api.as_ref(), &call),
        None => {
            error!("Bridge call {}() received but no API is bound", call.method);
            Err(crate::types::errors::BridgeError::NotFound(
                call.method.clone(),
            ))
        }
    };

    Some(bridge::reply_script(&call.id, &outcome))
}

// ─── Module-level operations ───

/// Navigates the webview to `url`.
pub fn load_url(url: &str) -> Result<(), WindowError> {
    url::Url::parse(url).map_err(|_| WindowError::InvalidUrl(url.to_string()))?;
    send(ShellEvent::LoadUrl(url.to_string()))
}

/// Displays an HTML string in the webview.
///
/// `base_uri` is accepted for interface parity but not used to resolve
/// relative references; the content is served from the shell's own
/// origin.
pub fn load_html(content: &str, base_uri: Option<&str>) -> Result<(), WindowError> {
    if let Some(base) = base_uri {
        debug!(%base, "load_html base URI ignored");
    }
    send(ShellEvent::LoadHtml(content.to_string()))
}

/// Returns the last committed URL, if any navigation happened yet.
pub fn get_current_url() -> Result<Option<String>, WindowError> {
    Ok(handle()?.shared.current_url.lock().unwrap().clone())
}

/// Evaluates `script` in the page and blocks until its completion value
/// arrives, up to the default deadline.
///
/// Must not be called from the UI thread; the result is delivered by the
/// message loop this call would be blocking.
pub fn evaluate_js(script: &str) -> Result<Value, ScriptError> {
    evaluate_js_with_timeout(script, EVAL_TIMEOUT)
}

/// [`evaluate_js`] with an explicit deadline.
pub fn evaluate_js_with_timeout(script: &str, timeout: Duration) -> Result<Value, ScriptError> {
    let handle = handle().map_err(|_| ScriptError::Cancelled)?;
    let (token, slot) = handle.shared.pending.insert();
    let event = ShellEvent::EvalScript {
        token: token.clone(),
        script: script.to_string(),
    };
    if handle.proxy.send_event(event).is_err() {
        handle.shared.pending.take(&token);
        return Err(ScriptError::Cancelled);
    }
    let outcome = slot.wait(timeout);
    if outcome.is_err() {
        // Drop the slot so a late callback does not fulfill a dead wait
        handle.shared.pending.take(&token);
    }
    outcome
}

/// Binds an API object, installing its `window.glassview.api.*` stubs in
/// the live page and on every subsequent navigation.
pub fn set_js_api(api: ApiRegistry) -> Result<(), WindowError> {
    send(ShellEvent::SetApi(Arc::new(api)))
}

/// Toggles borderless fullscreen on the window's current monitor.
pub fn toggle_fullscreen() -> Result<(), WindowError> {
    send(ShellEvent::ToggleFullscreen)
}

/// Closes the window and ends the message loop.
pub fn destroy_window() -> Result<(), WindowError> {
    send(ShellEvent::Destroy)
}

/// Blocks until the webview has finished its first load, or `timeout`
/// passes. Returns whether the webview is ready.
pub fn wait_ready(timeout: Duration) -> Result<bool, WindowError> {
    Ok(handle()?.shared.ready.wait(timeout))
}

/// Shows a native file dialog. See [`crate::dialogs::show_file_dialog`].
pub fn create_file_dialog(request: &FileDialogRequest) -> Option<Vec<std::path::PathBuf>> {
    dialogs::show_file_dialog(request)
}

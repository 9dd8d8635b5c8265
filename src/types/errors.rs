use std::fmt;

// === BridgeError ===

/// Errors raised while dispatching a bridge call from hosted script.
#[derive(Debug)]
pub enum BridgeError {
    /// No function with the given name is registered.
    NotFound(String),
    /// The registered callback returned an error.
    Callback(String),
    /// The incoming IPC message could not be parsed as a bridge call.
    InvalidPayload(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::NotFound(name) => write!(f, "Function {}() does not exist", name),
            BridgeError::Callback(msg) => write!(f, "Callback error: {}", msg),
            BridgeError::InvalidPayload(msg) => write!(f, "Invalid bridge payload: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

// === ScriptError ===

/// Errors raised while evaluating script in the webview.
#[derive(Debug)]
pub enum ScriptError {
    /// No result arrived within the wait deadline.
    Timeout,
    /// The window went away before the result was delivered.
    Cancelled,
    /// The webview returned something that is not valid JSON.
    InvalidResult(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Timeout => write!(f, "Script evaluation timed out"),
            ScriptError::Cancelled => write!(f, "Script evaluation cancelled"),
            ScriptError::InvalidResult(msg) => {
                write!(f, "Script returned invalid result: {}", msg)
            }
        }
    }
}

impl std::error::Error for ScriptError {}

// === WindowError ===

/// Errors related to window creation and module-level window operations.
#[derive(Debug)]
pub enum WindowError {
    /// No window has been created yet (or it was already destroyed).
    NotCreated,
    /// A window is already running; only one shell window exists at a time.
    AlreadyRunning,
    /// The background color string is not a valid `#RRGGBB` value.
    InvalidColor(String),
    /// The URL could not be parsed.
    InvalidUrl(String),
    /// The event loop is gone and the control message could not be delivered.
    EventLoopClosed,
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::NotCreated => write!(f, "No webview window has been created"),
            WindowError::AlreadyRunning => write!(f, "A webview window is already running"),
            WindowError::InvalidColor(value) => write!(f, "Invalid background color: {}", value),
            WindowError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            WindowError::EventLoopClosed => write!(f, "Window event loop is closed"),
        }
    }
}

impl std::error::Error for WindowError {}

// === ConfigError ===

/// Errors related to shell configuration persistence.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the configuration.
    SerializationError(String),
    /// The provided config key path is invalid.
    InvalidKey(String),
    /// The provided value does not fit the addressed field.
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::InvalidKey(key) => write!(f, "Invalid config key: {}", key),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// === LocaleError ===

/// Errors related to localization string tables.
#[derive(Debug)]
pub enum LocaleError {
    /// The strings file was not found.
    FileNotFound(String),
    /// The strings file could not be parsed.
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::FileNotFound(path) => write!(f, "Strings file not found: {}", path),
            LocaleError::ParseError(msg) => write!(f, "Strings file parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

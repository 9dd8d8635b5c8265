//! JSON function-call bridge between hosted script and Rust callbacks.
//!
//! Hosted pages call `window.glassview.api.<name>(param)`, which posts a
//! JSON message over the webview IPC channel. `dispatch` looks the
//! function up by name in the bound [`ApiRegistry`] and invokes it with
//! the single JSON parameter. The result (or error) travels back by
//! evaluating a resolver script in the page.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::types::errors::BridgeError;

/// Callback signature for bridge functions: one optional JSON parameter
/// in, one JSON value out.
pub type ApiFn = Box<dyn Fn(Option<Value>) -> Result<Value, BridgeError> + Send + Sync>;

/// The seam between the window shell and the bound API object.
pub trait JsApi: Send + Sync {
    /// Registered function names, sorted.
    fn names(&self) -> Vec<String>;
    /// Invoke a function by name with its JSON parameter.
    fn invoke(&self, name: &str, param: Option<Value>) -> Result<Value, BridgeError>;
}

/// Named host callbacks exposed to hosted script.
#[derive(Default)]
pub struct ApiRegistry {
    functions: BTreeMap<String, ApiFn>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Registers a callback under `name`, replacing any previous binding.
    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn(Option<Value>) -> Result<Value, BridgeError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Box::new(f));
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }
}

impl JsApi for ApiRegistry {
    fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    fn invoke(&self, name: &str, param: Option<Value>) -> Result<Value, BridgeError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| BridgeError::NotFound(name.to_string()))?;
        function(param)
    }
}

/// A parsed bridge call from the page: call id, function name, parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeCall {
    pub id: String,
    pub method: String,
    pub params: Option<Value>,
}

/// Parses a raw IPC message body into a [`BridgeCall`].
///
/// Expected shape: `{"id": "...", "method": "...", "params": <any>}`.
/// `params` may be absent or `null`.
pub fn parse_call(body: &str) -> Result<BridgeCall, BridgeError> {
    let msg: Value = serde_json::from_str(body)
        .map_err(|e| BridgeError::InvalidPayload(e.to_string()))?;

    let id = msg
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| BridgeError::InvalidPayload("missing id".to_string()))?
        .to_string();
    let method = msg
        .get("method")
        .and_then(|v| v.as_str())
        .ok_or_else(|| BridgeError::InvalidPayload("missing method".to_string()))?
        .to_string();
    let params = match msg.get("params") {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.clone()),
    };

    Ok(BridgeCall { id, method, params })
}

/// Dispatches a call against the bound API.
///
/// Missing functions and callback errors are logged here and returned so
/// the shell can surface them to the page; they never propagate further.
pub fn dispatch(api: &dyn JsApi, call: &BridgeCall) -> Result<Value, BridgeError> {
    debug!(method = %call.method, "bridge call");
    match api.invoke(&call.method, call.params.clone()) {
        Ok(value) => Ok(value),
        Err(e @ BridgeError::NotFound(_)) => {
            error!("{}", e);
            Err(e)
        }
        Err(e) => {
            error!("Error occurred while evaluating function {}: {}", call.method, e);
            Err(e)
        }
    }
}

/// Renders the script that resolves the page-side promise for `call_id`.
pub fn reply_script(call_id: &str, outcome: &Result<Value, BridgeError>) -> String {
    let (result, error) = match outcome {
        Ok(value) => (value.clone(), Value::Null),
        Err(e) => (Value::Null, json!(e.to_string())),
    };
    format!(
        "window.glassview && window.glassview._resolve({}, {}, {})",
        json!(call_id),
        result,
        error
    )
}

const BRIDGE_JS: &str = include_str!("../resources/bridge.js");

/// Renders the bootstrap script that installs `window.glassview.api.*`
/// promise stubs for every registered function.
pub fn bootstrap_script(api: &dyn JsApi) -> String {
    let names = json!(api.names());
    BRIDGE_JS.replace("__GLASSVIEW_FUNCTIONS__", &names.to_string())
}

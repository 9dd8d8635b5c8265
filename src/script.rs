//! Blocking script-evaluation plumbing.
//!
//! `evaluate_js` runs on an arbitrary thread while the webview delivers
//! results on the UI thread. Each evaluation gets a token and a
//! [`ResultSlot`]; the caller blocks on the slot until the UI thread
//! fulfills it or the deadline passes.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use serde_json::Value;
use uuid::Uuid;

use crate::types::errors::ScriptError;

/// Default deadline for a blocking evaluation.
pub const EVAL_TIMEOUT: Duration = Duration::from_secs(30);

/// One-shot slot a calling thread blocks on until the evaluation result
/// is available.
pub struct ResultSlot {
    value: Mutex<Option<Result<Value, ScriptError>>>,
    ready: Condvar,
}

impl ResultSlot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            value: Mutex::new(None),
            ready: Condvar::new(),
        })
    }

    /// Stores the outcome and wakes the waiting thread. A second fulfill
    /// is ignored.
    pub fn fulfill(&self, outcome: Result<Value, ScriptError>) {
        let mut slot = self.value.lock().unwrap();
        if slot.is_none() {
            *slot = Some(outcome);
            self.ready.notify_all();
        }
    }

    /// Blocks until the slot is fulfilled or `timeout` passes.
    pub fn wait(&self, timeout: Duration) -> Result<Value, ScriptError> {
        let mut slot = self.value.lock().unwrap();
        let deadline = std::time::Instant::now() + timeout;
        while slot.is_none() {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            if remaining.is_zero() {
                return Err(ScriptError::Timeout);
            }
            let (guard, wait_result) = self.ready.wait_timeout(slot, remaining).unwrap();
            slot = guard;
            if wait_result.timed_out() && slot.is_none() {
                return Err(ScriptError::Timeout);
            }
        }
        slot.take().unwrap()
    }
}

/// Token → slot map for evaluations in flight.
#[derive(Clone, Default)]
pub struct PendingResults {
    inner: Arc<Mutex<HashMap<String, Arc<ResultSlot>>>>,
}

impl PendingResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new evaluation and returns its token and slot.
    pub fn insert(&self) -> (String, Arc<ResultSlot>) {
        let token = Uuid::new_v4().to_string();
        let slot = ResultSlot::new();
        self.inner
            .lock()
            .unwrap()
            .insert(token.clone(), slot.clone());
        (token, slot)
    }

    /// Removes and returns the slot for `token`, if still pending.
    pub fn take(&self, token: &str) -> Option<Arc<ResultSlot>> {
        self.inner.lock().unwrap().remove(token)
    }

    /// Cancels every pending evaluation, e.g. when the window closes.
    pub fn cancel_all(&self) {
        let slots: Vec<Arc<ResultSlot>> =
            self.inner.lock().unwrap().drain().map(|(_, s)| s).collect();
        for slot in slots {
            slot.fulfill(Err(ScriptError::Cancelled));
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

/// Parses the JSON-serialized completion value the webview hands back.
pub fn parse_eval_result(raw: &str) -> Result<Value, ScriptError> {
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(|e| ScriptError::InvalidResult(e.to_string()))
}

/// Escapes a host string for interpolation inside a double-quoted JS
/// string literal.
pub fn escape_js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Line separators are valid JSON but not valid in JS literals
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

//! Unit tests for the blocking evaluation plumbing: result slots, the
//! pending-results map, result parsing, and JS string escaping.

use std::thread;
use std::time::Duration;

use serde_json::{json, Value};

use glassview::script::{escape_js_string, parse_eval_result, PendingResults, ResultSlot};
use glassview::types::errors::ScriptError;

// ─── ResultSlot ───

#[test]
fn test_slot_fulfilled_before_wait() {
    let slot = ResultSlot::new();
    slot.fulfill(Ok(json!("done")));
    assert_eq!(slot.wait(Duration::from_millis(10)).unwrap(), json!("done"));
}

#[test]
fn test_slot_wait_blocks_until_fulfilled() {
    let slot = ResultSlot::new();
    let waiter = slot.clone();
    let handle = thread::spawn(move || waiter.wait(Duration::from_secs(5)));

    thread::sleep(Duration::from_millis(50));
    slot.fulfill(Ok(json!(123)));

    assert_eq!(handle.join().unwrap().unwrap(), json!(123));
}

#[test]
fn test_slot_wait_times_out() {
    let slot = ResultSlot::new();
    let err = slot.wait(Duration::from_millis(20)).unwrap_err();
    assert!(matches!(err, ScriptError::Timeout));
}

#[test]
fn test_slot_second_fulfill_ignored() {
    let slot = ResultSlot::new();
    slot.fulfill(Ok(json!(1)));
    slot.fulfill(Ok(json!(2)));
    assert_eq!(slot.wait(Duration::from_millis(10)).unwrap(), json!(1));
}

#[test]
fn test_slot_delivers_errors() {
    let slot = ResultSlot::new();
    slot.fulfill(Err(ScriptError::Cancelled));
    assert!(matches!(
        slot.wait(Duration::from_millis(10)),
        Err(ScriptError::Cancelled)
    ));
}

// ─── PendingResults ───

#[test]
fn test_pending_insert_and_take() {
    let pending = PendingResults::new();
    let (token, slot) = pending.insert();
    assert_eq!(pending.len(), 1);

    let taken = pending.take(&token).expect("slot should be pending");
    taken.fulfill(Ok(json!("ok")));
    assert_eq!(slot.wait(Duration::from_millis(10)).unwrap(), json!("ok"));
    assert!(pending.is_empty());
}

#[test]
fn test_pending_take_twice_returns_none() {
    let pending = PendingResults::new();
    let (token, _slot) = pending.insert();
    assert!(pending.take(&token).is_some());
    assert!(pending.take(&token).is_none());
}

#[test]
fn test_pending_tokens_are_unique() {
    let pending = PendingResults::new();
    let (a, _) = pending.insert();
    let (b, _) = pending.insert();
    assert_ne!(a, b);
    assert_eq!(pending.len(), 2);
}

#[test]
fn test_cancel_all_wakes_waiters() {
    let pending = PendingResults::new();
    let (_token, slot) = pending.insert();
    let handle = thread::spawn(move || slot.wait(Duration::from_secs(5)));

    thread::sleep(Duration::from_millis(50));
    pending.cancel_all();

    assert!(matches!(handle.join().unwrap(), Err(ScriptError::Cancelled)));
    assert!(pending.is_empty());
}

// ─── Result parsing ───

#[test]
fn test_parse_eval_result_json() {
    assert_eq!(parse_eval_result("42").unwrap(), json!(42));
    assert_eq!(parse_eval_result(r#"{"a":[1,2]}"#).unwrap(), json!({"a":[1,2]}));
    assert_eq!(parse_eval_result("null").unwrap(), Value::Null);
}

#[test]
fn test_parse_eval_result_empty_is_null() {
    assert_eq!(parse_eval_result("").unwrap(), Value::Null);
}

#[test]
fn test_parse_eval_result_invalid() {
    assert!(matches!(
        parse_eval_result("undefined garbage"),
        Err(ScriptError::InvalidResult(_))
    ));
}

// ─── Escaping ───

#[test]
fn test_escape_plain_string_unchanged() {
    assert_eq!(escape_js_string("hello world"), "hello world");
}

#[test]
fn test_escape_quotes_and_backslashes() {
    assert_eq!(escape_js_string(r#"a"b"#), r#"a\"b"#);
    assert_eq!(escape_js_string(r"a\b"), r"a\\b");
    assert_eq!(escape_js_string("it's"), r"it\'s");
}

#[test]
fn test_escape_control_characters() {
    assert_eq!(escape_js_string("a\nb"), r"a\nb");
    assert_eq!(escape_js_string("a\tb"), r"a\tb");
    assert_eq!(escape_js_string("a\rb"), r"a\rb");
    assert_eq!(escape_js_string("a\u{1}b"), "a\\u0001b");
}

#[test]
fn test_escape_line_separators() {
    assert_eq!(escape_js_string("a\u{2028}b"), r"a b");
    assert_eq!(escape_js_string("a\u{2029}b"), r"a b");
}

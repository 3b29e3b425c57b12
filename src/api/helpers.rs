//! Shared helpers for the WASM API
//!
//! Serialization to `JsValue` and JSON, with failures logged and turned into
//! JS error strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects rather than ES Maps, so callers can read fields directly
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to a JSON string
pub fn to_json<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<String, JsValue> {
    serde_json::to_string_pretty(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert any displayable error into a JS error string
pub fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::warn!("{}", msg);
    JsValue::from_str(&msg)
}

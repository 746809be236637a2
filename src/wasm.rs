use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::classifier::{ErrorClassifier, ErrorCode};
use crate::response;

/// Plain JS objects for maps and `null` for `None`, matching `JSON.parse` output.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn parse_error_code(s: &str) -> Option<ErrorCode> {
    s.parse::<ErrorCode>().ok()
}

/// Classify a caught storage error and return the GraphQL error payload.
///
/// `raw_json` is the serialized error object. Unparseable input classifies
/// as an error without a message.
#[wasm_bindgen]
pub fn classify_error(raw_json: &str, operation_context: &str) -> JsValue {
    to_js(&response::classify_json(raw_json, operation_context))
}

/// Wire code for a bare message string.
#[wasm_bindgen]
pub fn classify_message_code(message: &str) -> String {
    ErrorClassifier::classify_message(message).to_string()
}

/// User-facing text for a wire code, or null for an unknown code.
#[wasm_bindgen]
pub fn user_message_for(code: &str, operation_context: &str) -> Option<String> {
    parse_error_code(code).map(|c| c.user_message(operation_context))
}

/// Every wire code in rule order, each with the substring that selects it (null for the fallback).
#[wasm_bindgen]
pub fn all_error_codes() -> JsValue {
    to_js(&response::error_code_catalog())
}

//! Shared HTTP response handling for every service call.
//!
//! Bodies are read as text first so a non-JSON error page never aborts
//! parsing before the status has been reported.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Characters of a non-JSON error body quoted in the error message.
const ERROR_SNIPPET_CHARS: usize = 120;

/// Read a response and translate it into JSON or an [`ApiError`].
///
/// - **Non-2xx** → [`ApiError::Api`] with the body's `message` (or `detail`)
///   field, else `API request failed (status N)`, with the first 120
///   characters of the body appended when it is not JSON.
/// - **2xx, empty body** → `{}`.
/// - **2xx** → parsed JSON, [`ApiError::Decode`] if it does not parse.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the body cannot be read.
pub async fn handle_response(resp: reqwest::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let raw = resp.text().await?;
    interpret(status, &raw)
}

/// Status/body interpretation behind [`handle_response`].
///
/// # Errors
///
/// Returns [`ApiError::Api`] for non-2xx statuses and [`ApiError::Decode`]
/// for unparseable 2xx bodies.
pub fn interpret(status: StatusCode, raw: &str) -> Result<Value, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: failure_message(status, raw),
        });
    }
    if raw.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(raw)?)
}

/// Deserialize a handled body into its typed shape.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] on shape mismatch.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}

/// Like [`decode`] for list endpoints, where an empty 2xx body means no items.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] on shape mismatch.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    match value {
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        other => decode(other),
    }
}

fn failure_message(status: StatusCode, raw: &str) -> String {
    let fallback = format!("API request failed (status {})", status.as_u16());
    let body = if raw.is_empty() { "{}" } else { raw };
    match serde_json::from_str::<Value>(body) {
        // A bare `null` has no fields to read, so it is quoted like non-JSON.
        Ok(Value::Null) | Err(_) => format!("{fallback}: {}", snippet(raw)),
        Ok(data) => message_field(&data, "message")
            .or_else(|| message_field(&data, "detail"))
            .unwrap_or(fallback),
    }
}

/// A non-empty `message`/`detail` value. Strings are used as-is; structured
/// values (FastAPI validation errors) are rendered as compact JSON.
fn message_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn snippet(raw: &str) -> &str {
    raw.char_indices()
        .nth(ERROR_SNIPPET_CHARS)
        .map_or(raw, |(end, _)| &raw[..end])
}

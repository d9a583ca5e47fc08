// libs/shared/models/src/error.rs
use serde_json::Value;
use thiserror::Error;

/// Client-side error taxonomy for every backend round trip.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication required: {0}")]
    Auth(String),

    #[error("{0}")]
    Domain(String),

    #[error("Invalid response payload: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Normalize the backend's structured error payload (`{ "detail": ... }`)
/// into a single display string. The backend sends `detail` as a plain
/// string, a list of field errors, or a nested object; all three must end up
/// readable on one line.
pub fn normalize_detail(payload: &Value) -> String {
    match payload.get("detail") {
        Some(detail) => normalize_detail_value(detail),
        None => fallback_message(payload),
    }
}

fn normalize_detail_value(detail: &Value) -> String {
    match detail {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let messages: Vec<String> = items.iter().map(field_error_message).collect();
            if messages.is_empty() {
                "Request failed".to_string()
            } else {
                messages.join("; ")
            }
        }
        Value::Object(_) => field_error_message(detail),
        other => other.to_string(),
    }
}

/// One validation item: `{"loc": [...], "msg": "...", "type": "..."}` or a
/// bare string. Keeps the last `loc` segment as a field label when present.
fn field_error_message(item: &Value) -> String {
    if let Value::String(s) = item {
        return s.clone();
    }

    let message = item
        .get("msg")
        .or_else(|| item.get("message"))
        .or_else(|| item.get("detail"))
        .and_then(Value::as_str);

    match message {
        Some(msg) => {
            let field = item
                .get("loc")
                .and_then(Value::as_array)
                .and_then(|loc| loc.last())
                .and_then(Value::as_str);
            match field {
                Some(field) => format!("{}: {}", field, msg),
                None => msg.to_string(),
            }
        }
        None => item.to_string(),
    }
}

fn fallback_message(payload: &Value) -> String {
    match payload.as_str() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "Request failed".to_string(),
    }
}

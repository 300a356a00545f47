use serde::Serialize;
use serde_json::{Map, Value};

/// Error envelope the platform wraps around every application failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorPayload {
    pub error_code: i64,
    /// Non-zero when the caller is being throttled.
    pub throttle_seconds: i64,
    pub error_status: String,
    pub message: String,
    pub message_data: Map<String, Value>,
}

impl ApiErrorPayload {
    /// Build a payload from a response document.
    ///
    /// Each field is read on its own, so a field of an unexpected type falls
    /// back to its default without losing the others.
    pub fn from_document(document: &Value, error_code: i64) -> Self {
        let text = |field: &str| {
            document
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        ApiErrorPayload {
            error_code,
            throttle_seconds: document
                .get("ThrottleSeconds")
                .and_then(Value::as_i64)
                .unwrap_or_default(),
            error_status: text("ErrorStatus"),
            message: text("Message"),
            message_data: document
                .get("MessageData")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

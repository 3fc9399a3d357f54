/// Centralized helpers for WebSocket error messages.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code and context.
use serde_json::{json, Value};

/// Sent when a client message cannot be parsed.
pub const INVALID_COMMAND: &str = "INVALID_COMMAND";

/// Sent when a client exceeds the per-second request limit.
pub const RATE_LIMITED: &str = "RATE_LIMITED";

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "OUT_OF_RANGE").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. the offending slot index).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(Value::Null),
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_shape() {
        let text = ws_error_message("OUT_OF_RANGE", "slot \"9\" is out of range", Some(json!({ "index": 9 })));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["action"], "Error");
        assert_eq!(parsed["data"]["code"], "OUT_OF_RANGE");
        assert_eq!(parsed["data"]["message"], "slot \"9\" is out of range");
        assert_eq!(parsed["data"]["context"]["index"], 9);
    }

    #[test]
    fn test_error_message_without_context() {
        let parsed: Value = serde_json::from_str(&ws_error_message(INVALID_COMMAND, "Invalid command", None)).unwrap();
        assert!(parsed["data"]["context"].is_null());
    }
}

//! Common helper functions for API handlers.
//!
//! Response builders shared across handlers. Responses are the Lambda proxy
//! shape: a JSON `statusCode` plus a stringified `body`.

use serde_json::{Value, json};

/// Returns a response with the given status code and JSON body.
#[must_use]
pub fn ok_json(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

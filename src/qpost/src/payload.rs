//! Turns the raw `rabbit_message_body` setting into wire bytes.

use serde_json::Value;

use crate::error::PayloadError;
use crate::literal;

/// Parses the configured literal and renders it for the wire: a string
/// yields its content without the surrounding quotes, a mapping serializes
/// to canonical JSON, and every other kind keeps its standard textual form.
pub fn build(message_body_raw: &str) -> Result<Vec<u8>, PayloadError> {
    match literal::parse(message_body_raw)? {
        Value::String(text) => Ok(text.into_bytes()),
        value => Ok(value.to_string().into_bytes()),
    }
}

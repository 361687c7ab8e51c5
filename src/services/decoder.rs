// src/services/decoder.rs
use serde_json::Value;

use crate::errors::DecodeError;
use crate::models::event::NotificationEvent;

/// Parses one raw text frame into a typed event.
///
/// Two-stage so the caller can tell a frame that is not JSON at all apart
/// from a JSON object missing `type` or `created_date`. Total and
/// synchronous; hostile input comes back as a `DecodeError`, never a panic.
pub fn decode_frame(raw: &str) -> Result<NotificationEvent, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(DecodeError::MalformedFrame)?;
    serde_json::from_value(value).map_err(DecodeError::InvalidEnvelope)
}

//! The `{status, payload}` response envelope and its classification.
//!
//! Every remote call comes back in this shape. Decoding is explicit: a
//! response that is not a map with both keys (status integral) is malformed —
//! a distinct error class from a well-formed envelope that reports failure.

use crate::error::ApiError;
use serde_json::Value;

/// A well-formed response envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: i64,
    pub payload: Value,
}

/// The payload trichotomy that picks the error message on non-zero status.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Scalar(String),
    Structured(Value),
}

impl Payload {
    /// Structured wins over empty: an empty map or list is still structured,
    /// matching how the server's own error envelopes are interpreted.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Self::Structured(value.clone()),
            Value::Null => Self::Empty,
            Value::String(s) if s.is_empty() => Self::Empty,
            Value::String(s) => Self::Scalar(s.clone()),
            other => Self::Scalar(other.to_string()),
        }
    }
}

impl Envelope {
    /// Decode a raw response into a well-formed envelope.
    pub fn decode(raw: &Value) -> Result<Self, ApiError> {
        let Some(map) = raw.as_object() else {
            tracing::error!(response = %raw, "non-mapping response from server");
            return Err(ApiError::MalformedResponse);
        };
        let (Some(status), Some(payload)) = (map.get("status"), map.get("payload")) else {
            tracing::error!(response = %raw, "response envelope missing status or payload");
            return Err(ApiError::MalformedResponse);
        };
        let Some(status) = as_integer(status) else {
            tracing::error!(response = %raw, "response envelope has non-integer status");
            return Err(ApiError::MalformedResponse);
        };
        Ok(Self {
            status,
            payload: payload.clone(),
        })
    }

    /// Classify the envelope: the payload verbatim on status 0, an error
    /// otherwise. Every failing branch logs status and raw payload first —
    /// the server's own text is often the only actionable detail.
    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.status == 401 {
            tracing::error!(status = self.status, "authentication rejected by server");
            return Err(ApiError::AuthenticationFailed);
        }
        if self.status == 0 {
            return Ok(self.payload);
        }
        match Payload::classify(&self.payload) {
            Payload::Structured(payload) => {
                tracing::error!(status = self.status, payload = %payload, "API call failed");
                Err(ApiError::CallFailed("Failed to call the API".to_string()))
            }
            Payload::Empty => {
                tracing::error!(status = self.status, "API call failed with empty payload");
                Err(ApiError::EmptyResult)
            }
            Payload::Scalar(message) => {
                tracing::error!(status = self.status, payload = %message, "API call failed");
                Err(ApiError::CallFailed(message))
            }
        }
    }
}

/// Integral value, accepting both numbers and numeric strings — the SOAP
/// decoder yields numbers but scripted transports may not.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

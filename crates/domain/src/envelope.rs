//! Envelope — the uniform `{code, message, data}` value returned by every
//! resource method.

use serde::{Deserialize, Serialize};

/// Status code carried by a successful envelope.
pub const OK: u16 = 200;
/// Status code for client input that failed a presence check.
pub const BAD_REQUEST: u16 = 400;
/// Status code returned for verbs a resource does not implement.
pub const METHOD_NOT_ALLOWED: u16 = 405;

/// Uniform response wrapper.
///
/// `data` is generic so each resource can return its own payload type. An
/// absent payload serializes as `"data": null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// HTTP status code written for this envelope.
    pub code: u16,
    /// Short human-readable message, possibly empty.
    pub message: String,
    /// Optional payload.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Create an envelope carrying a payload.
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an envelope without a payload.
    #[must_use]
    pub fn empty(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// The constant `405` envelope with an empty message and no data.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::empty(METHOD_NOT_ALLOWED, "")
    }
}

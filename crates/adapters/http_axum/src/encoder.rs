//! Envelope encoding — turns an [`Envelope`] into a JSON HTTP response.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use restshim_domain::envelope::Envelope;

/// Reasons an envelope cannot be written as a response.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The payload is not representable as JSON.
    #[error("failed to serialize envelope")]
    Serialize(#[from] serde_json::Error),
    /// The envelope code is not a valid HTTP status.
    #[error("invalid status code {0}")]
    InvalidStatus(u16),
}

/// Encode `envelope` into its status and JSON body.
///
/// The body is `{"code":…,"message":…,"data":…}` with `data` written as
/// `null` when absent.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidStatus`] when `code` is outside `100..=999`
/// and [`EncodeError::Serialize`] when the payload fails to serialize.
pub fn encode<T: Serialize>(envelope: &Envelope<T>) -> Result<(StatusCode, Bytes), EncodeError> {
    let status = StatusCode::from_u16(envelope.code)
        .map_err(|_| EncodeError::InvalidStatus(envelope.code))?;
    let body = serde_json::to_vec(envelope)?;
    Ok((status, Bytes::from(body)))
}

/// Parse an envelope back from a response body.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when `body` is not an
/// envelope holding a `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Response wrapper writing an [`Envelope`] through [`encode`].
///
/// Exactly one status/body pair is written: the envelope's own, or a bare
/// `500` with an empty body when encoding fails.
#[derive(Debug)]
pub struct EnvelopeResponse<T>(pub Envelope<T>);

impl<T> From<Envelope<T>> for EnvelopeResponse<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self(envelope)
    }
}

impl<T: Serialize> IntoResponse for EnvelopeResponse<T> {
    fn into_response(self) -> Response {
        match encode(&self.0) {
            Ok((status, body)) => {
                (status, [(CONTENT_TYPE, "application/json")], body).into_response()
            }
            Err(err) => {
                tracing::error!(error = %err, code = self.0.code, "failed to encode envelope");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

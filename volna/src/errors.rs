//! Error types.

use std::fmt;

use serde::Deserialize;
use volna_wire::DecodeError;

use crate::transport::TransportError;

// ─── ApiError ────────────────────────────────────────────────────────────────

/// An error returned by the API inside the `{"error": …}` envelope.
///
/// Unwrapping the envelope is the transport's job; this type is provided so
/// transport implementations can decode the error body once and surface it
/// through [`TransportError`] in a recognizable shape.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(rename = "error_code")]
    pub code: i64,
    #[serde(rename = "error_msg")]
    pub message: String,
    /// Echo of the request parameters, as sent back by the API.
    pub request_params: Vec<RequestParam>,
}

/// One `key`/`value` pair echoed back in [`ApiError::request_params`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestParam {
    pub key: String,
    pub value: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ─── Error ───────────────────────────────────────────────────────────────────

/// The error type returned from every API method.
#[derive(Debug)]
pub enum Error {
    /// The transport failed. Surfaced verbatim, never retried here.
    Transport(TransportError),
    /// The response body did not match the endpoint's documented shape.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "{e}"),
            Self::Decode(e)    => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Decode(e)    => Some(e),
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self { Self::Transport(e) }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self { Self::Decode(e) }
}

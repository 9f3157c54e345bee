//! Response payload decoding.
//!
//! The transport boundary convention is fixed once, for every endpoint: the
//! bytes handed to this module are the raw JSON of the API's `response`
//! field, with the `{"error": …}` envelope already unwrapped by the
//! transport. Scalar-returning endpoints therefore produce JSON scalars
//! (`42`, `"ok"`), and the decoders here parse them as such.
//!
//! A decode failure is always surfaced as [`DecodeError`]; it is never
//! masked by a zero-valued result.

use std::fmt;

use serde::de::DeserializeOwned;

// ─── DecodeError ─────────────────────────────────────────────────────────────

/// Errors that can occur while decoding a response body.
#[derive(Debug)]
pub enum DecodeError {
    /// The body is not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// The body is valid JSON, but not the envelope this endpoint documents.
    Envelope { expected: &'static str },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "malformed response body: {e}"),
            Self::Envelope { expected } => {
                write!(f, "unexpected response envelope: expected {expected}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Envelope { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e) }
}

/// Specialized `Result` for response decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

// ─── Structured decode ───────────────────────────────────────────────────────

/// Decode a structured body: a JSON object or array into the declared
/// response record.
///
/// All response fields are optional by upstream convention (empty fields are
/// omitted), so records deserialized here carry `#[serde(default)]`.
pub fn object<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

// ─── Scalar decode ───────────────────────────────────────────────────────────

/// Decode a bare integer body (`42`).
pub fn int(body: &[u8]) -> Result<i64> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a boolean-as-integer body: `1` on success, `0` otherwise.
/// Any nonzero integer maps to `true`; a non-integer body is an error.
pub fn bool_int(body: &[u8]) -> Result<bool> {
    Ok(int(body)? != 0)
}

/// Decode a bare string body (`"value"`, quotes and escapes included).
pub fn string(body: &[u8]) -> Result<String> {
    Ok(serde_json::from_slice(body)?)
}

// ─── Extended / Normal pairs ─────────────────────────────────────────────────

/// Response of an endpoint whose shape is selected by the `extended` flag
/// on the corresponding request.
///
/// The variant is fully determined by the flag that was *sent*: a caller
/// that passed `extended: true` always receives [`MaybeExtended::Extended`]
/// and can match on it unconditionally. Decoding never probes the body to
/// guess its shape.
#[derive(Clone, Debug, PartialEq)]
pub enum MaybeExtended<N, E> {
    Normal(N),
    Extended(E),
}

impl<N, E> MaybeExtended<N, E> {
    /// The normal variant, if that is what was decoded.
    pub fn normal(self) -> Option<N> {
        match self {
            Self::Normal(v) => Some(v),
            Self::Extended(_) => None,
        }
    }

    /// The extended variant, if that is what was decoded.
    pub fn extended(self) -> Option<E> {
        match self {
            Self::Normal(_) => None,
            Self::Extended(v) => Some(v),
        }
    }
}

/// Decode one of two disjoint shapes, chosen by the `extended` flag that was
/// sent in the request.
pub fn by_flag<N, E>(extended: bool, body: &[u8]) -> Result<MaybeExtended<N, E>>
where
    N: DeserializeOwned,
    E: DeserializeOwned,
{
    if extended {
        Ok(MaybeExtended::Extended(object(body)?))
    } else {
        Ok(MaybeExtended::Normal(object(body)?))
    }
}

// ─── Irregular envelopes ─────────────────────────────────────────────────────

/// Decode the ID-keyed object envelope (`messages.delete`): a JSON object
/// whose keys are stringified numeric IDs, e.g. `{"123":1,"456":1}`.
///
/// The numeric keys are collected (non-numeric keys are skipped, values are
/// not inspected); any body that is not an object fails with
/// [`DecodeError::Envelope`].
pub fn id_list(body: &[u8]) -> Result<Vec<i64>> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let map = value.as_object().ok_or(DecodeError::Envelope {
        expected: "object keyed by numeric IDs",
    })?;
    Ok(map.keys().filter_map(|k| k.parse().ok()).collect())
}

//! The transport seam.
//!
//! Everything below method dispatch — HTTP, authentication tokens, API
//! versioning, rate limiting, retries — lives behind [`Transport`]. This
//! crate never performs I/O itself; it hands the transport a method name
//! and encoded parameters and gets back raw payload bytes.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

use volna_wire::Params;

// ─── TransportError ──────────────────────────────────────────────────────────

/// An error produced by the transport, surfaced to callers verbatim.
///
/// This layer never interprets or retries transport failures; whatever the
/// transport reports (I/O failure, HTTP status, an API `{"error": …}`
/// envelope mapped to [`crate::ApiError`]) is wrapped and passed through.
#[derive(Debug)]
pub struct TransportError(Box<dyn StdError + Send + Sync>);

impl TransportError {
    pub fn new(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(err.into())
    }

    /// The underlying error, for downcasting to the transport's own type.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync) {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
        self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref())
    }
}

// ─── Transport ───────────────────────────────────────────────────────────────

/// Executes one API call and returns the raw bytes of its `response` payload.
///
/// The contract, held uniformly across every endpoint:
///
/// * `method` is the full endpoint name, e.g. `"friends.get"`.
/// * `params` is `None` for parameterless endpoints; implementations fold
///   the pairs into their query string or form body together with their own
///   `access_token` / `v` / `lang` parameters (see [`Params::into_pairs`]).
/// * The returned bytes are the bare JSON of the `response` field: the
///   `{"error": …}` envelope must already be unwrapped and reported as a
///   failure by the transport.
/// * Cancellation and deadlines thread through the returned future;
///   dropping it aborts the call.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

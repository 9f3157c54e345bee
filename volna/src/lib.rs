//! # volna
//!
//! Typed bindings over the VK REST API, generic over a pluggable
//! [`Transport`].
//!
//! This layer is a catalog, not an engine: each method encodes a parameter
//! record, dispatches one named endpoint through the transport, and decodes
//! the response into a typed value. HTTP, auth tokens, rate limiting and
//! retries all belong to the transport; nothing is cached or retried here,
//! and a façade holds no state beyond its transport reference, so sharing
//! it across concurrent callers is safe whenever the transport is.
//!
//! ```rust,no_run
//! # async fn run(transport: impl volna::Transport) -> Result<(), volna::Error> {
//! use volna::api::friends::FriendsGetParams;
//!
//! let vk = volna::Vk::new(transport);
//! let friends = vk.friends().get(&FriendsGetParams {
//!     user_id: 1,
//!     count: 5,
//!     ..Default::default()
//! }).await?;
//! println!("{} friends", friends.count);
//! # Ok(())
//! # }
//! ```
//!
//! Endpoints outside the typed catalog remain reachable through
//! [`Vk::request`] plus the decoders in [`volna_wire::decode`].

#![deny(unsafe_code)]

mod errors;
mod macros;
mod transport;

pub mod api;
pub mod types;

pub use errors::{ApiError, Error, RequestParam};
pub use transport::{Transport, TransportError};
pub use volna_wire::{BoolInt, DecodeError, MaybeExtended, OpaqueJson, ParamValue, Params, ToParams};

use volna_wire::decode;

use crate::api::account::Account;
use crate::api::friends::Friends;
use crate::api::groups::Groups;
use crate::api::messages::Messages;
use crate::api::status::Status;
use crate::api::storage::Storage;
use crate::api::users::Users;
use crate::api::utils::Utils;
use crate::api::wall::Wall;

/// Decode step shared by the generated methods, so every schema mismatch is
/// logged at the same place before it propagates.
pub(crate) fn decoded<R>(method: &str, result: decode::Result<R>) -> Result<R, Error> {
    match result {
        Ok(v) => Ok(v),
        Err(e) => {
            tracing::warn!(method, error = %e, "response decode failed");
            Err(e.into())
        }
    }
}

// ─── Vk ──────────────────────────────────────────────────────────────────────

/// The API client: one transport reference and the namespace accessors.
pub struct Vk<T: Transport> {
    transport: T,
}

impl<T: Transport> Vk<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Raw escape hatch: dispatch any endpoint by name.
    ///
    /// Returns the raw `response` payload bytes; pair with the decoders in
    /// [`volna_wire::decode`] for endpoints the typed catalog doesn't cover.
    pub async fn request(&self, method: &str, params: Option<Params>) -> Result<Vec<u8>, Error> {
        tracing::debug!(
            method,
            params = params.as_ref().map_or(0, Params::len),
            "dispatching api call"
        );
        let result = self.transport.request(method, params).await;
        if let Err(e) = &result {
            tracing::debug!(method, error = %e, "transport failed");
        }
        Ok(result?)
    }

    /// Encode `params` and dispatch `method`.
    pub(crate) async fn call(
        &self,
        method: &str,
        params: &impl ToParams,
    ) -> Result<Vec<u8>, Error> {
        self.request(method, Some(params.to_params())).await
    }

    // ── Namespaces ────────────────────────────────────────────────────────

    pub fn account(&self) -> Account<'_, T> {
        Account { api: self }
    }

    pub fn friends(&self) -> Friends<'_, T> {
        Friends { api: self }
    }

    pub fn groups(&self) -> Groups<'_, T> {
        Groups { api: self }
    }

    pub fn messages(&self) -> Messages<'_, T> {
        Messages { api: self }
    }

    pub fn status(&self) -> Status<'_, T> {
        Status { api: self }
    }

    pub fn storage(&self) -> Storage<'_, T> {
        Storage { api: self }
    }

    pub fn users(&self) -> Users<'_, T> {
        Users { api: self }
    }

    pub fn utils(&self) -> Utils<'_, T> {
        Utils { api: self }
    }

    pub fn wall(&self) -> Wall<'_, T> {
        Wall { api: self }
    }
}

//! Wire conventions shared by every VK API endpoint.
//!
//! The API surface is a catalog of hundreds of near-identical methods; what
//! they share is a small set of encoding and decoding rules, implemented here
//! once:
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`params`] | Flat `key=value` request encoding and the [`params!`] macro |
//! | [`decode`] | JSON / scalar response decoding and [`DecodeError`]         |
//!
//! The crate knows nothing about HTTP or authentication; it turns parameter
//! records into key/value pairs and response bytes into typed values, and
//! that is all.

#![deny(unsafe_code)]

pub mod decode;
pub mod params;

pub use decode::{DecodeError, MaybeExtended};
pub use params::{ParamValue, Params, ToParams};

use serde::{Deserialize, Deserializer};

// ─── BoolInt ─────────────────────────────────────────────────────────────────

/// A boolean the API encodes as the integers `0` / `1`.
///
/// Response objects carry flags as ints (`"verified": 1`); this newtype
/// decodes any integer, mapping nonzero to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoolInt(pub bool);

impl<'de> Deserialize<'de> for BoolInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(deserializer)?;
        Ok(BoolInt(n != 0))
    }
}

impl From<BoolInt> for bool {
    fn from(v: BoolInt) -> Self { v.0 }
}

impl From<bool> for BoolInt {
    fn from(v: bool) -> Self { BoolInt(v) }
}

// ─── OpaqueJson ──────────────────────────────────────────────────────────────

/// A payload the typed schema does not (yet) cover.
///
/// Decodes successfully and exposes the raw JSON structure, so an untyped
/// nested object never fails the whole response. Callers that need the
/// contents can pull them out of the inner [`serde_json::Value`] by hand.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OpaqueJson(pub serde_json::Value);

impl OpaqueJson {
    /// Returns `true` if nothing was present (or only JSON `null`).
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

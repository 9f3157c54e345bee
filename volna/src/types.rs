//! Shared API object types.
//!
//! Field sets are the commonly used subset of the upstream objects; the API
//! omits empty fields, so every field defaults. Parts of an object whose
//! schema is polymorphic (attachments, geo) stay [`OpaqueJson`] until a
//! typed schema covers them.

use serde::Deserialize;
use volna_wire::{BoolInt, OpaqueJson};

/// A user profile.
///
/// Only the fields requested through a `fields` parameter are populated by
/// the API; everything else stays at its default.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub screen_name: String,
    /// `"deleted"` or `"banned"` for deactivated profiles, empty otherwise.
    pub deactivated: String,
    pub sex: i64,
    pub online: BoolInt,
    pub verified: BoolInt,
    pub photo_100: String,
    pub last_seen: OpaqueJson,
}

/// A community.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub screen_name: String,
    /// 0 — open, 1 — closed, 2 — private.
    pub is_closed: i64,
    /// `"group"`, `"page"` or `"event"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub deactivated: String,
    pub verified: BoolInt,
    pub members_count: i64,
    pub photo_100: String,
}

/// A wall post.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: i64,
    pub owner_id: i64,
    pub from_id: i64,
    /// Unix time of publication.
    pub date: i64,
    pub text: String,
    pub is_pinned: BoolInt,
    pub marked_as_ads: BoolInt,
    pub likes: Counter,
    pub comments: Counter,
    pub reposts: Counter,
    /// Media attachments; the attachment schema is polymorphic per `type`.
    pub attachments: Vec<OpaqueJson>,
    pub geo: OpaqueJson,
}

/// A count sub-object (`likes`, `comments`, `reposts`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Counter {
    pub count: i64,
}

/// An audio track, as embedded in a status.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Audio {
    pub id: i64,
    pub owner_id: i64,
    pub artist: String,
    pub title: String,
    /// Duration in seconds.
    pub duration: i64,
    pub url: String,
}

//! `status.*` — the status line shown on a profile.

use serde::Deserialize;

use crate::macros::api_method;
use crate::types::Audio;
use crate::{Transport, Vk};

/// Methods of the `status` namespace, obtained via [`Vk::status`].
pub struct Status<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `status.get`.
    pub struct StatusGetParams {
        /// User ID; negative values designate a community.
        opt user_id: i64 = "user_id",
        opt group_id: i64 = "group_id",
    }
}

/// Response for `status.get`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusGetResponse {
    pub text: String,
    /// The track being broadcast, when audio broadcasting is on.
    pub audio: Audio,
}

volna_wire::params! {
    /// Parameters for `status.set`.
    pub struct StatusSetParams {
        /// Text of the new status.
        opt text: String = "text",
        /// Community to set the status in; the current user if blank.
        opt group_id: i64 = "group_id",
    }
}

impl<T: Transport> Status<'_, T> {
    api_method! {
        /// Returns the status of a user or community.
        get("status.get", StatusGetParams) -> object StatusGetResponse
    }

    api_method! {
        /// Sets a new status for the current user.
        set("status.set", StatusSetParams) -> bool
    }
}

//! `utils.*` — service methods.

use serde::Deserialize;

use crate::macros::api_method;
use crate::{Transport, Vk};

/// Methods of the `utils` namespace, obtained via [`Vk::utils`].
pub struct Utils<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `utils.resolveScreenName`.
    pub struct UtilsResolveScreenNameParams {
        /// Screen name of a user, community or application.
        req screen_name: String = "screen_name",
    }
}

/// Response for `utils.resolveScreenName`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UtilsResolveScreenNameResponse {
    /// `user`, `group` or `application`.
    #[serde(rename = "type")]
    pub kind: String,
    pub object_id: i64,
}

volna_wire::params! {
    /// Parameters for `utils.checkLink`.
    pub struct UtilsCheckLinkParams {
        req url: String = "url",
    }
}

/// Response for `utils.checkLink`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UtilsCheckLinkResponse {
    /// `not_banned`, `banned` or `processing`.
    pub status: String,
    pub link: String,
}

impl<T: Transport> Utils<'_, T> {
    api_method! {
        /// Returns the current server time as Unix time.
        get_server_time("utils.getServerTime") -> int
    }

    api_method! {
        /// Resolves a screen name to its object type and ID.
        resolve_screen_name("utils.resolveScreenName", UtilsResolveScreenNameParams) -> object UtilsResolveScreenNameResponse
    }

    api_method! {
        /// Checks a link against the list of blocked sites.
        check_link("utils.checkLink", UtilsCheckLinkParams) -> object UtilsCheckLinkResponse
    }
}

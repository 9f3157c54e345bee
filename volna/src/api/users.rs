//! `users.*` — user profiles.

use serde::Deserialize;

use crate::macros::api_method;
use crate::types::User;
use crate::{Transport, Vk};

/// Methods of the `users` namespace, obtained via [`Vk::users`].
pub struct Users<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `users.get`.
    pub struct UsersGetParams {
        /// User IDs or screen names; the current user by default.
        opt user_ids: Vec<String> = "user_ids",
        /// Profile fields to return, e.g. `online`, `photo_100`.
        opt fields: Vec<String> = "fields",
        opt name_case: String = "name_case",
    }
}

volna_wire::params! {
    /// Parameters for `users.getFollowers`.
    pub struct UsersGetFollowersParams {
        opt user_id: i64 = "user_id",
        opt offset: i64 = "offset",
        opt count: i64 = "count",
        opt fields: Vec<String> = "fields",
        opt name_case: String = "name_case",
    }
}

/// Response for `users.getFollowers`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UsersGetFollowersResponse {
    pub count: i64,
    pub items: Vec<i64>,
}

impl<T: Transport> Users<'_, T> {
    api_method! {
        /// Returns detailed information on users; a bare array in the order
        /// the IDs were requested.
        get("users.get", UsersGetParams) -> object Vec<User>
    }

    api_method! {
        /// Returns IDs of the users following a user.
        get_followers("users.getFollowers", UsersGetFollowersParams) -> object UsersGetFollowersResponse
    }
}

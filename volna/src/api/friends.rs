//! `friends.*` — a user's friend list.

use serde::Deserialize;
use volna_wire::BoolInt;

use crate::macros::api_method;
use crate::{Transport, Vk};

/// Methods of the `friends` namespace, obtained via [`Vk::friends`].
pub struct Friends<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `friends.get`.
    pub struct FriendsGetParams {
        /// User ID; the current user by default.
        opt user_id: i64 = "user_id",
        /// Sort order: `name` (requires `fields`) or `hints`.
        opt order: String = "order",
        /// Friend list ID to use as the source.
        opt list_id: i64 = "list_id",
        /// Number of friends to return.
        opt count: i64 = "count",
        /// Offset into the result set.
        opt offset: i64 = "offset",
        /// Profile fields to return, e.g. `first_name`, `online`.
        opt fields: Vec<String> = "fields",
        /// Name-declension case: `nom` (default), `gen`, `dat`, …
        opt name_case: String = "name_case",
    }
}

/// Response for `friends.get`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FriendsGetResponse {
    /// Total friends number.
    pub count: i64,
    pub items: Vec<i64>,
}

volna_wire::params! {
    /// Parameters for `friends.getOnline`.
    pub struct FriendsGetOnlineParams {
        opt user_id: i64 = "user_id",
        opt list_id: i64 = "list_id",
        /// Also report friends online from mobile.
        opt online_mobile: bool = "online_mobile",
        opt order: String = "order",
        opt count: i64 = "count",
        opt offset: i64 = "offset",
    }
}

volna_wire::params! {
    /// Parameters for `friends.getMutual`.
    pub struct FriendsGetMutualParams {
        opt source_uid: i64 = "source_uid",
        opt target_uid: i64 = "target_uid",
        opt target_uids: Vec<i64> = "target_uids",
        opt order: String = "order",
        opt count: i64 = "count",
        opt offset: i64 = "offset",
    }
}

volna_wire::params! {
    /// Parameters for `friends.add`.
    pub struct FriendsAddParams {
        req user_id: i64 = "user_id",
        /// Text of the friend-request message.
        opt text: String = "text",
        /// Re-approve a previously deleted request.
        opt follow: bool = "follow",
    }
}

volna_wire::params! {
    /// Parameters for `friends.delete`.
    pub struct FriendsDeleteParams {
        opt user_id: i64 = "user_id",
    }
}

/// Response for `friends.delete`: which of the possible outcomes happened.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FriendsDeleteResponse {
    pub success: BoolInt,
    pub friend_deleted: BoolInt,
    pub out_request_deleted: BoolInt,
    pub in_request_deleted: BoolInt,
    pub suggestion_deleted: BoolInt,
}

impl<T: Transport> Friends<'_, T> {
    api_method! {
        /// Returns a list of user IDs of a user's friends.
        get("friends.get", FriendsGetParams) -> object FriendsGetResponse
    }

    api_method! {
        /// Returns user IDs of friends who are online.
        get_online("friends.getOnline", FriendsGetOnlineParams) -> object Vec<i64>
    }

    api_method! {
        /// Returns user IDs of the mutual friends of two users.
        get_mutual("friends.getMutual", FriendsGetMutualParams) -> object Vec<i64>
    }

    api_method! {
        /// Approves or creates a friend request. Returns `1` (request sent),
        /// `2` (approved) or `4` (resent).
        add("friends.add", FriendsAddParams) -> int
    }

    api_method! {
        /// Declines a friend request or deletes a user from friends.
        delete("friends.delete", FriendsDeleteParams) -> object FriendsDeleteResponse
    }
}

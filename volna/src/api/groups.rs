//! `groups.*` — communities.

use serde::Deserialize;

use crate::macros::api_method;
use crate::types::Group;
use crate::{Transport, Vk};

/// Methods of the `groups` namespace, obtained via [`Vk::groups`].
pub struct Groups<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `groups.get`.
    pub struct GroupsGetParams {
        opt user_id: i64 = "user_id",
        /// Return full [`Group`] objects instead of bare IDs.
        opt extended: bool = "extended",
        /// `admin`, `editor`, `moder`, `groups`, `publics`, `events`.
        opt filter: Vec<String> = "filter",
        /// Group fields to return; only valid with `extended`.
        opt fields: Vec<String> = "fields",
        opt offset: i64 = "offset",
        opt count: i64 = "count",
    }
}

/// Non-extended response for `groups.get`: bare community IDs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroupsGetResponse {
    pub count: i64,
    pub items: Vec<i64>,
}

/// Extended response for `groups.get`: full community objects.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroupsGetExtendedResponse {
    pub count: i64,
    pub items: Vec<Group>,
}

volna_wire::params! {
    /// Parameters for `groups.getMembers`.
    pub struct GroupsGetMembersParams {
        /// ID or screen name of the community.
        opt group_id: String = "group_id",
        /// `id_asc`, `id_desc`, `time_asc` or `time_desc`.
        opt sort: String = "sort",
        opt offset: i64 = "offset",
        opt count: i64 = "count",
        opt fields: Vec<String> = "fields",
        /// `friends` or `unsure`.
        opt filter: String = "filter",
    }
}

/// Response for `groups.getMembers`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroupsGetMembersResponse {
    pub count: i64,
    pub items: Vec<i64>,
}

volna_wire::params! {
    /// Parameters for `groups.join`.
    pub struct GroupsJoinParams {
        opt group_id: i64 = "group_id",
        /// For events: `1` — maybe attending, `0` — certainly attending.
        opt not_sure: String = "not_sure",
    }
}

volna_wire::params! {
    /// Parameters for `groups.leave`.
    pub struct GroupsLeaveParams {
        opt group_id: i64 = "group_id",
    }
}

impl<T: Transport> Groups<'_, T> {
    api_method! {
        /// Returns the communities a user belongs to; the response shape
        /// follows the `extended` flag.
        get("groups.get", GroupsGetParams) -> extended(GroupsGetResponse, GroupsGetExtendedResponse)
    }

    api_method! {
        /// Returns a list of community members.
        get_members("groups.getMembers", GroupsGetMembersParams) -> object GroupsGetMembersResponse
    }

    api_method! {
        /// Joins a community or signs up for an event.
        join("groups.join", GroupsJoinParams) -> bool
    }

    api_method! {
        /// Leaves a community or declines an event invitation.
        leave("groups.leave", GroupsLeaveParams) -> bool
    }
}

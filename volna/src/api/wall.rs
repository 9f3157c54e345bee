//! `wall.*` — user and community walls.

use serde::Deserialize;

use crate::macros::api_method;
use crate::types::{Group, Post, User};
use crate::{Transport, Vk};

/// Methods of the `wall` namespace, obtained via [`Vk::wall`].
pub struct Wall<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `wall.get`.
    pub struct WallGetParams {
        /// Wall owner; negative values designate a community.
        opt owner_id: i64 = "owner_id",
        /// Owner's short address, as an alternative to `owner_id`.
        opt domain: String = "domain",
        opt offset: i64 = "offset",
        /// Number of posts to return, at most 100.
        opt count: i64 = "count",
        /// `owner`, `others`, `all` (default), `postponed` or `suggests`.
        opt filter: String = "filter",
        /// Also return the `profiles` and `groups` referenced by the posts.
        opt extended: bool = "extended",
        opt fields: Vec<String> = "fields",
    }
}

/// Non-extended response for `wall.get`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WallGetResponse {
    pub count: i64,
    pub items: Vec<Post>,
}

/// Extended response for `wall.get`: posts plus the referenced profiles
/// and communities.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WallGetExtendedResponse {
    pub count: i64,
    pub items: Vec<Post>,
    pub profiles: Vec<User>,
    pub groups: Vec<Group>,
}

volna_wire::params! {
    /// Parameters for `wall.post`.
    pub struct WallPostParams {
        opt owner_id: i64 = "owner_id",
        /// Make the post visible to friends only.
        opt friends_only: bool = "friends_only",
        /// Publish on behalf of the community rather than the user.
        opt from_group: bool = "from_group",
        /// (Required if `attachments` is not set.) Text of the post.
        opt message: String = "message",
        /// (Required if `message` is not set.) `<type><owner>_<media>`
        /// descriptors, e.g. `photo100172_166443618`.
        opt attachments: Vec<String> = "attachments",
        opt services: String = "services",
        /// Sign a community post with the posting user's name.
        opt signed: bool = "signed",
        /// Unix time to delay publication until.
        opt publish_date: i64 = "publish_date",
        opt lat: f64 = "lat",
        opt long: f64 = "long",
        opt place_id: i64 = "place_id",
        /// Post ID, for publishing scheduled or suggested posts.
        opt post_id: i64 = "post_id",
        opt guid: String = "guid",
        opt mark_as_ads: bool = "mark_as_ads",
        opt close_comments: bool = "close_comments",
    }
}

/// Response for `wall.post`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WallPostResponse {
    /// ID of the created post.
    pub post_id: i64,
}

volna_wire::params! {
    /// Parameters for `wall.delete`.
    pub struct WallDeleteParams {
        opt owner_id: i64 = "owner_id",
        opt post_id: i64 = "post_id",
    }
}

volna_wire::params! {
    /// Parameters for `wall.deleteComment`.
    pub struct WallDeleteCommentParams {
        req owner_id: i64 = "owner_id",
        req comment_id: i64 = "comment_id",
    }
}

impl<T: Transport> Wall<'_, T> {
    api_method! {
        /// Returns posts from a user or community wall; the response shape
        /// follows the `extended` flag.
        get("wall.get", WallGetParams) -> extended(WallGetResponse, WallGetExtendedResponse)
    }

    api_method! {
        /// Adds a post to a wall; also publishes suggested and scheduled
        /// posts.
        post("wall.post", WallPostParams) -> object WallPostResponse
    }

    api_method! {
        /// Deletes a wall post.
        delete("wall.delete", WallDeleteParams) -> bool
    }

    api_method! {
        /// Deletes a comment from a wall post.
        delete_comment("wall.deleteComment", WallDeleteCommentParams) -> bool
    }
}

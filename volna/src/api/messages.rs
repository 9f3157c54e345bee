//! `messages.*` — private messages.

use serde::Deserialize;

use crate::macros::api_method;
use crate::{Transport, Vk};

/// Methods of the `messages` namespace, obtained via [`Vk::messages`].
pub struct Messages<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `messages.send`. Exactly one destination
    /// (`user_id`, `peer_id`, `domain` or `chat_id`) should be set.
    pub struct MessagesSendParams {
        opt user_id: i64 = "user_id",
        /// Destination ID: user ID, `2000000000 + chat_id`, or `-community_id`.
        opt peer_id: i64 = "peer_id",
        /// User's short address, e.g. `durov`.
        opt domain: String = "domain",
        opt chat_id: i64 = "chat_id",
        /// (Required if `attachment` is not set.) Message text.
        opt message: String = "message",
        /// Geographical latitude, from -90 to 90.
        opt lat: f64 = "lat",
        /// Geographical longitude, from -180 to 180.
        opt long: f64 = "long",
        /// Attachments as `<type><owner_id>_<media_id>` descriptors.
        opt attachment: Vec<String> = "attachment",
        opt reply_to: i64 = "reply_to",
        /// IDs of messages to forward.
        opt forward_messages: Vec<i64> = "forward_messages",
        opt sticker_id: i64 = "sticker_id",
        /// Dedupe key: resending with the same value will not duplicate.
        opt random_id: i64 = "random_id",
    }
}

volna_wire::params! {
    /// Parameters for `messages.delete`.
    pub struct MessagesDeleteParams {
        /// IDs of the messages to delete.
        opt message_ids: Vec<i64> = "message_ids",
        /// Mark as spam.
        opt spam: bool = "spam",
        /// Delete for all recipients, not just this account.
        opt delete_for_all: bool = "delete_for_all",
        /// Group ID, for community messages with a user token.
        opt group_id: i64 = "group_id",
    }
}

volna_wire::params! {
    /// Parameters for `messages.deleteConversation`.
    pub struct MessagesDeleteConversationParams {
        opt user_id: i64 = "user_id",
        opt peer_id: i64 = "peer_id",
        opt offset: i64 = "offset",
        opt count: i64 = "count",
        opt group_id: i64 = "group_id",
    }
}

/// Response for `messages.deleteConversation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessagesDeleteConversationResponse {
    /// ID of the last message that was deleted.
    pub last_deleted_id: i64,
}

volna_wire::params! {
    /// Parameters for `messages.restore`.
    pub struct MessagesRestoreParams {
        /// ID of a previously deleted message to restore.
        req message_id: i64 = "message_id",
        opt group_id: i64 = "group_id",
    }
}

volna_wire::params! {
    /// Parameters for `messages.markAsRead`.
    pub struct MessagesMarkAsReadParams {
        opt message_ids: Vec<i64> = "message_ids",
        opt peer_id: i64 = "peer_id",
        opt start_message_id: i64 = "start_message_id",
        opt group_id: i64 = "group_id",
    }
}

impl<T: Transport> Messages<'_, T> {
    api_method! {
        /// Sends a message; returns the new message ID.
        send("messages.send", MessagesSendParams) -> int
    }

    api_method! {
        /// Deletes one or more messages. The API answers with an object
        /// keyed by the stringified IDs it deleted; the method returns
        /// those IDs as a list.
        delete("messages.delete", MessagesDeleteParams) -> id_list
    }

    api_method! {
        /// Deletes all private messages in a conversation.
        delete_conversation("messages.deleteConversation", MessagesDeleteConversationParams) -> object MessagesDeleteConversationResponse
    }

    api_method! {
        /// Restores a deleted message.
        restore("messages.restore", MessagesRestoreParams) -> bool
    }

    api_method! {
        /// Marks messages as read.
        mark_as_read("messages.markAsRead", MessagesMarkAsReadParams) -> bool
    }
}

//! `account.*` — the current account's settings.

use serde::Deserialize;
use volna_wire::BoolInt;

use crate::macros::api_method;
use crate::{Transport, Vk};

/// Methods of the `account` namespace, obtained via [`Vk::account`].
pub struct Account<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `account.getInfo`.
    pub struct AccountGetInfoParams {
        /// Settings to return; all of them by default.
        opt fields: Vec<String> = "fields",
    }
}

/// Response for `account.getInfo`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub country: String,
    pub https_required: BoolInt,
    pub own_posts_default: BoolInt,
    pub no_wall_replies: BoolInt,
    pub intro: BoolInt,
    pub lang: i64,
    #[serde(rename = "2fa_required")]
    pub two_fa_required: BoolInt,
}

volna_wire::params! {
    /// Parameters for `account.setInfo`.
    pub struct AccountSetInfoParams {
        /// Setting name.
        opt name: String = "name",
        /// Setting value.
        opt value: String = "value",
    }
}

volna_wire::params! {
    /// Parameters for `account.ban` and `account.unban`.
    pub struct AccountBanParams {
        opt owner_id: i64 = "owner_id",
    }
}

impl<T: Transport> Account<'_, T> {
    api_method! {
        /// Returns current account info.
        get_info("account.getInfo", AccountGetInfoParams) -> object AccountInfo
    }

    api_method! {
        /// Edits one current-account setting.
        set_info("account.setInfo", AccountSetInfoParams) -> bool
    }

    api_method! {
        /// Adds a user or community to the account blacklist.
        ban("account.ban", AccountBanParams) -> bool
    }

    api_method! {
        /// Removes a user or community from the account blacklist.
        unban("account.unban", AccountBanParams) -> bool
    }
}

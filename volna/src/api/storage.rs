//! `storage.*` — per-user key/value variables.

use crate::macros::api_method;
use crate::{Transport, Vk};

/// Methods of the `storage` namespace, obtained via [`Vk::storage`].
pub struct Storage<'a, T: Transport> {
    pub(crate) api: &'a Vk<T>,
}

volna_wire::params! {
    /// Parameters for `storage.get`.
    pub struct StorageGetParams {
        req key: String = "key",
        opt user_id: i64 = "user_id",
        /// Read an application-global variable instead of a per-user one.
        opt global: bool = "global",
    }
}

volna_wire::params! {
    /// Parameters for `storage.set`.
    pub struct StorageSetParams {
        req key: String = "key",
        /// New value; deletes the variable when empty.
        opt value: String = "value",
        opt user_id: i64 = "user_id",
        opt global: bool = "global",
    }
}

volna_wire::params! {
    /// Parameters for `storage.getKeys`.
    pub struct StorageGetKeysParams {
        opt user_id: i64 = "user_id",
        opt global: bool = "global",
        opt offset: i64 = "offset",
        opt count: i64 = "count",
    }
}

impl<T: Transport> Storage<'_, T> {
    api_method! {
        /// Returns the value of the named variable.
        get("storage.get", StorageGetParams) -> string
    }

    api_method! {
        /// Saves a value into the named variable.
        set("storage.set", StorageSetParams) -> bool
    }

    api_method! {
        /// Returns the names of all stored variables.
        get_keys("storage.getKeys", StorageGetKeysParams) -> object Vec<String>
    }
}

//! Per-namespace method sets.
//!
//! One module per namespace, each a table of parameter records, response
//! records and `api_method!` rows. Namespace façades are obtained from the
//! accessors on [`crate::Vk`] and hold nothing but the transport reference.

pub mod account;
pub mod friends;
pub mod groups;
pub mod messages;
pub mod status;
pub mod storage;
pub mod users;
pub mod utils;
pub mod wall;

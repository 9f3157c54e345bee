//! Request parameter encoding.
//!
//! Every API call carries a flat set of `key=value` parameters, and the
//! rules are identical across the whole catalog:
//!
//! * list values are joined with `,` into a single parameter
//! * `true` encodes as `"1"`; `false` is omitted — the wire never sees `"0"`
//! * optional fields are omitted while they hold their type's default value
//! * required fields are always sent, even when zero or empty
//!
//! Joined lists do not escape embedded commas. The upstream API has no
//! escaping scheme for them either, so a value containing `,` splits into
//! two on the server side; this is a documented limitation, not handled
//! here.

// ─── ParamValue ──────────────────────────────────────────────────────────────

/// Wire representation of one parameter value.
pub trait ParamValue {
    /// `true` while the value is at its type's default, meaning an
    /// optional field holding it is left off the wire entirely.
    fn is_default(&self) -> bool;

    /// The wire text for this value.
    fn encode(&self) -> String;
}

macro_rules! impl_param_value_num {
    ($($ty:ty)*) => {
        $(
            impl ParamValue for $ty {
                fn is_default(&self) -> bool { *self == 0 }
                fn encode(&self) -> String { self.to_string() }
            }
        )*
    };
}

impl_param_value_num!(i32 i64 u32 u64);

impl ParamValue for f64 {
    fn is_default(&self) -> bool { *self == 0.0 }
    fn encode(&self) -> String { self.to_string() }
}

/// Booleans encode as `"1"` or nothing at all: a `false` flag is expressed
/// by omitting the key, so boolean parameters are always declared optional.
impl ParamValue for bool {
    fn is_default(&self) -> bool { !*self }
    fn encode(&self) -> String { "1".to_owned() }
}

impl ParamValue for String {
    fn is_default(&self) -> bool { self.is_empty() }
    fn encode(&self) -> String { self.clone() }
}

/// Comma-joined, in original order. No escaping of embedded commas.
impl ParamValue for Vec<String> {
    fn is_default(&self) -> bool { self.is_empty() }
    fn encode(&self) -> String { self.join(",") }
}

/// Comma-joined, in original order.
impl ParamValue for Vec<i64> {
    fn is_default(&self) -> bool { self.is_empty() }
    fn encode(&self) -> String {
        let items: Vec<String> = self.iter().map(|v| v.to_string()).collect();
        items.join(",")
    }
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// A transport-ready, ordered set of `key=value` pairs.
///
/// Built by [`ToParams`] implementations; consumed by the transport, which
/// typically folds the pairs into a query string or form body together with
/// its own `access_token` / `v` parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Insert a required field: the key is always sent, whatever the value.
    pub fn required(&mut self, key: &'static str, value: &impl ParamValue) {
        self.pairs.push((key, value.encode()));
    }

    /// Insert an optional field: the key is sent only when the value is not
    /// at its default.
    pub fn optional(&mut self, key: &'static str, value: &impl ParamValue) {
        if !value.is_default() {
            self.pairs.push((key, value.encode()));
        }
    }

    /// The encoded value for `key`, if the key was sent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Consume into the raw pairs, in insertion order. This is the shape a
    /// transport implementation feeds to its query-string builder.
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

/// Conversion of a parameter record into its wire pairs.
///
/// Implemented by the structs declared through [`params!`](crate::params!);
/// a pure, total function — encoding cannot fail.
pub trait ToParams {
    fn to_params(&self) -> Params;
}

// ─── params! ─────────────────────────────────────────────────────────────────

/// Declares one parameter record: the struct plus its [`ToParams`] impl.
///
/// One row per documented parameter, `opt` or `req` per the endpoint's
/// contract. `opt` fields follow the omit-at-default rule; `req` fields are
/// always sent.
///
/// ```
/// volna_wire::params! {
///     /// Parameters for `example.search`.
///     pub struct SearchParams {
///         req query: String = "q",
///         opt count: i64 = "count",
///         opt fields: Vec<String> = "fields",
///     }
/// }
/// ```
#[macro_export]
macro_rules! params {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $mode:ident $field:ident: $ty:ty = $key:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::ToParams for $name {
            fn to_params(&self) -> $crate::Params {
                let mut params = $crate::Params::new();
                $(
                    $crate::params!(@field params, self.$field, $key, $mode);
                )*
                params
            }
        }
    };

    (@field $params:ident, $value:expr, $key:literal, opt) => {
        $params.optional($key, &$value);
    };
    (@field $params:ident, $value:expr, $key:literal, req) => {
        $params.required($key, &$value);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_never_encodes_zero() {
        assert!(false.is_default());
        assert_eq!(true.encode(), "1");
    }

    #[test]
    fn int_list_joins_with_comma() {
        assert_eq!(vec![1i64, -2, 3].encode(), "1,-2,3");
    }
}

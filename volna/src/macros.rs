//! Method-body generation.
//!
//! Every endpoint follows the same dispatch: encode the parameter record,
//! invoke the transport with the endpoint name, decode per the documented
//! response shape. `api_method!` stamps out one method per catalog row so
//! the per-namespace files stay pure tables of parameters and responses.

/// Declares one endpoint method inside a namespace `impl` block.
///
/// The arm is keyed by the endpoint's documented response shape:
/// `object T` (structured record or bare array), `int`, `bool`
/// (boolean-as-integer), `string`, `id_list` (the ID-keyed object
/// envelope), or `extended(N, E)` (pair selected by the request's
/// `extended` flag). A form without a parameter type declares a
/// parameterless endpoint.
macro_rules! api_method {
    (
        $(#[$meta:meta])*
        $name:ident($method:literal, $params:ty) -> object $resp:ty
    ) => {
        $(#[$meta])*
        pub async fn $name(&self, params: &$params) -> Result<$resp, $crate::Error> {
            let body = self.api.call($method, params).await?;
            $crate::decoded($method, volna_wire::decode::object(&body))
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident($method:literal, $params:ty) -> int
    ) => {
        $(#[$meta])*
        pub async fn $name(&self, params: &$params) -> Result<i64, $crate::Error> {
            let body = self.api.call($method, params).await?;
            $crate::decoded($method, volna_wire::decode::int(&body))
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident($method:literal, $params:ty) -> bool
    ) => {
        $(#[$meta])*
        pub async fn $name(&self, params: &$params) -> Result<bool, $crate::Error> {
            let body = self.api.call($method, params).await?;
            $crate::decoded($method, volna_wire::decode::bool_int(&body))
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident($method:literal, $params:ty) -> string
    ) => {
        $(#[$meta])*
        pub async fn $name(&self, params: &$params) -> Result<String, $crate::Error> {
            let body = self.api.call($method, params).await?;
            $crate::decoded($method, volna_wire::decode::string(&body))
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident($method:literal, $params:ty) -> id_list
    ) => {
        $(#[$meta])*
        pub async fn $name(&self, params: &$params) -> Result<Vec<i64>, $crate::Error> {
            let body = self.api.call($method, params).await?;
            $crate::decoded($method, volna_wire::decode::id_list(&body))
        }
    };

    // The variant is picked from the flag sent in the request, so this arm
    // requires the parameter record to carry an `extended` field.
    (
        $(#[$meta:meta])*
        $name:ident($method:literal, $params:ty) -> extended($normal:ty, $extended:ty)
    ) => {
        $(#[$meta])*
        pub async fn $name(
            &self,
            params: &$params,
        ) -> Result<volna_wire::MaybeExtended<$normal, $extended>, $crate::Error> {
            let body = self.api.call($method, params).await?;
            $crate::decoded($method, volna_wire::decode::by_flag(params.extended, &body))
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident($method:literal) -> int
    ) => {
        $(#[$meta])*
        pub async fn $name(&self) -> Result<i64, $crate::Error> {
            let body = self.api.request($method, None).await?;
            $crate::decoded($method, volna_wire::decode::int(&body))
        }
    };
}

pub(crate) use api_method;

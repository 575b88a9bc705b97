//! Descriptor tables and typed wrappers, one module per API area.
//!
//! # Design
//! Each area is declared once with `operations!`. A declaration emits one
//! `pub const` descriptor per endpoint, the area's `OPERATIONS` table, and
//! two thin wrapper types (blocking and async) with one method per
//! endpoint. Every wrapper method only forwards its arguments to the
//! dispatcher; no endpoint carries logic of its own.

/// Declare an API area.
///
/// ```ignore
/// operations! {
///     /// Uplink settings.
///     area UplinkSettings, AsyncUplinkSettings;
///
///     /// Return the uplink settings for a network.
///     GET_NETWORK_UPLINK_SETTINGS = Get "/networks/{networkId}/uplinkSettings"
///         => get_network_uplink_settings(network_id) {
///             id: "getNetworkUplinkSettings",
///             tags: ["Uplink settings"],
///         }
/// }
/// ```
///
/// Wrapper arguments follow the template's slots in order. Endpoints that
/// declare `body: [...]` also take a `body` argument: anything that
/// serializes to a JSON object.
macro_rules! operations {
    (@args) => {
        $crate::payload::BodyArgs::new()
    };
    (@args $body:ident) => {
        $crate::payload::body_args($body)?
    };
    (
        $(#[$area_meta:meta])*
        area $Blocking:ident, $Async:ident;
        $(
            $(#[$op_meta:meta])*
            $CONST:ident = $method:ident $template:literal
                => $name:ident($($slot:ident),* $(,)?) {
                    id: $id:literal,
                    tags: [$($tag:literal),* $(,)?]
                    $(, $body:ident: [$($field:literal),* $(,)?]
                        $(, required: [$($req:literal),* $(,)?])?
                    )?
                    $(,)?
                }
        )*
    ) => {
        $(
            #[doc = concat!("Descriptor for `", $id, "`.")]
            pub const $CONST: $crate::descriptor::OperationDescriptor =
                $crate::descriptor::OperationDescriptor::new(
                    $id,
                    $crate::http::HttpMethod::$method,
                    $template,
                )
                .with_tags(&[$($tag),*])
                $(
                    .with_body(&[$($field),*])
                    $( .with_required(&[$($req),*]) )?
                )?;
        )*

        /// Every descriptor in this area.
        pub const OPERATIONS: &[&$crate::descriptor::OperationDescriptor] = &[$(&$CONST),*];

        $(#[$area_meta])*
        pub struct $Blocking<'a, T> {
            dispatcher: &'a $crate::dispatcher::Dispatcher<T>,
        }

        impl<'a, T> $Blocking<'a, T> {
            pub fn new(dispatcher: &'a $crate::dispatcher::Dispatcher<T>) -> Self {
                Self { dispatcher }
            }
        }

        impl<T: $crate::transport::Transport> $Blocking<'_, T> {
            $(
                $(#[$op_meta])*
                pub fn $name(
                    &self
                    $(, $slot: &str)*
                    $(, $body: &(impl ::serde::Serialize + ?Sized))?
                ) -> ::std::result::Result<::serde_json::Value, $crate::error::ApiError> {
                    let body_args = operations!(@args $($body)?);
                    self.dispatcher.invoke(&$CONST, &[$($slot),*], body_args)
                }
            )*
        }

        $(#[$area_meta])*
        ///
        /// Async variant.
        pub struct $Async<'a, T> {
            dispatcher: &'a $crate::dispatcher::Dispatcher<T>,
        }

        impl<'a, T> $Async<'a, T> {
            pub fn new(dispatcher: &'a $crate::dispatcher::Dispatcher<T>) -> Self {
                Self { dispatcher }
            }
        }

        impl<T: $crate::transport::AsyncTransport> $Async<'_, T> {
            $(
                $(#[$op_meta])*
                pub async fn $name(
                    &self
                    $(, $slot: &str)*
                    $(, $body: &(impl ::serde::Serialize + ?Sized + Sync))?
                ) -> ::std::result::Result<::serde_json::Value, $crate::error::ApiError> {
                    let body_args = operations!(@args $($body)?);
                    self.dispatcher
                        .invoke_async(&$CONST, &[$($slot),*], body_args)
                        .await
                }
            )*
        }
    };
}

pub mod action_batches;
pub mod catalog;
pub mod cellular_gateway;
pub mod uplink_settings;

pub use action_batches::{ActionBatches, AsyncActionBatches};
pub use cellular_gateway::{AsyncCellularGateway, CellularGateway};
pub use uplink_settings::{AsyncUplinkSettings, UplinkSettings};

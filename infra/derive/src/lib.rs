#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate in the workspace.
//!
//! * [`macro@dh_error`] turns an enum into a context-aware `thiserror` error.
//! * [`macro@dh_slice`] wraps feature state into a cloneable, registrable slice handle.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers consistent
//!   with the `OpenAPI` document.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a domain error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, SourceError>` for every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A `context` field must be `Option<Cow<'static, str>>`,
/// and any variant carrying a source must also carry a `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[dh_derive::dh_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn dh_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is an `Arc` wrapper that derefs
/// to it and implements `dh_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[dh_derive::dh_slice]
/// pub struct Pricing {
///     pub service: String,
/// }
///
/// let slice = Pricing::new(PricingInner { service: "pricing".to_owned() });
/// ```
#[proc_macro_attribute]
pub fn dh_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}

/// Declares an API data model.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives `utoipa::ToSchema`
/// when the consuming crate's `server` feature is on, and applies
/// `#[serde(rename_all = "camelCase", deny_unknown_fields)]` by default.
///
/// # Arguments
///
/// * `rename_all = "..."` overrides the rename policy.
/// * `deny_unknown_fields = false` accepts and ignores unknown fields.
///
/// ```rust,ignore
/// #[dh_derive::api_model(deny_unknown_fields = false)]
/// pub struct PricingRequest {
///     pub theme: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with `utoipa::path`.
///
/// Arguments are forwarded verbatim to `utoipa::path` when the `server` feature is on.
///
/// ```rust,ignore
/// #[dh_derive::api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

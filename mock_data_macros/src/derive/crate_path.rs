//! Paths into the runtime crate.
//!
//! Generated code never names `mock_data` directly. It goes through the
//! prefix returned by [`resolve`], which honours
//! `#[mock_data(crate = "...")]` for callers that depend on the runtime under
//! another name or re-export it from a support crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the runtime crate prefix from the parsed container attribute.
///
/// Without an override this is `::mock_data`; the leading `::` keeps the
/// path valid even when a local module shadows the crate name.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::mock_data }, |path| quote! { #path })
}

/// `<krate>::MockData`.
pub(crate) fn trait_path(krate: &TokenStream) -> TokenStream {
    quote! { #krate::MockData }
}

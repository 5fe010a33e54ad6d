//! Factory emission for enums.

use proc_macro2::TokenStream;
use quote::quote;

use super::mock_data_impl;
use crate::derive::introspect::{CanonicalVariant, TypeDeclaration, VariantFields};

/// Render the factory for an enum: `mock_data()` always returns the first
/// declared variant.
///
/// Unit variants are returned as-is. Variants carrying data are built with
/// `defaults`, which must align with the variant's fields.
pub(crate) fn emit_sum(
    decl: &TypeDeclaration,
    variant: &CanonicalVariant,
    defaults: &[TokenStream],
    krate: &TokenStream,
) -> TokenStream {
    let name = &variant.ident;
    let construction = match &variant.fields {
        VariantFields::Unit => quote! {},
        VariantFields::Named(members) => {
            let inits = members
                .iter()
                .zip(defaults)
                .map(|(member, default)| {
                    let field = &member.ident;
                    quote! { #field: #default }
                });
            quote! { { #( #inits, )* } }
        }
        VariantFields::Unnamed(_) => quote! { ( #( #defaults, )* ) },
    };
    mock_data_impl(decl, krate, &quote! { Self::#name #construction })
}

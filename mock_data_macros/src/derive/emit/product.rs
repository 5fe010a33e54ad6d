//! Factory emission for structs.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::{mock_data_impl, with_mock_data_bounds};
use crate::derive::introspect::{Member, TypeDeclaration};

/// Name of the companion struct holding per-field overrides.
pub(crate) fn overrides_ident(ident: &Ident) -> Ident {
    format_ident!("{}MockOverrides", ident)
}

/// Render the factory for a struct.
///
/// The output contains:
///
/// - `<Name>MockOverrides`, one `Option` field per member in declaration
///   order, each named and scoped like its member, plus a `Default` impl that
///   leaves every field `None`;
/// - `<Name>::mock_data_with(overrides)`, which fills each `None` with its
///   default and builds the value with every member passed under its own
///   name;
/// - `impl MockData for <Name>` delegating to `mock_data_with` with no
///   overrides.
///
/// `defaults` must align with `members`.
pub(crate) fn emit_product(
    decl: &TypeDeclaration,
    members: &[Member],
    defaults: &[TokenStream],
    krate: &TokenStream,
) -> TokenStream {
    let TypeDeclaration {
        ident,
        vis,
        generics,
        ..
    } = decl;
    let overrides = overrides_ident(ident);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let bounded = with_mock_data_bounds(generics, krate);
    let (bounded_impl_generics, _, _) = bounded.split_for_impl();
    let names: Vec<&Ident> = members.iter().map(|m| &m.ident).collect();

    let fields = members.iter().map(|member| {
        let Member {
            ident: name,
            vis: field_vis,
            ty,
            ..
        } = member;
        let doc = format!("Replaces the generated default for `{name}`.");
        quote! {
            #[doc = #doc]
            #field_vis #name: ::core::option::Option<#ty>
        }
    });
    let inits = names.iter().zip(defaults).map(|(name, default)| {
        quote! { #name: #name.unwrap_or_else(|| #default) }
    });

    let struct_doc = format!(
        "Field overrides for `{ident}::mock_data_with`. Fields left as `None` receive their \
         generated default."
    );
    let fn_doc = format!(
        "Builds a `{ident}` from `overrides`, generating a default for every field left as \
         `None`."
    );
    let body = quote! {
        Self::mock_data_with(::core::default::Default::default())
    };
    let trait_impl = mock_data_impl(decl, krate, &body);

    quote! {
        #[doc = #struct_doc]
        #vis struct #overrides #generics #where_clause {
            #( #fields, )*
        }

        #[automatically_derived]
        impl #impl_generics ::core::default::Default for #overrides #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #( #names: ::core::option::Option::None, )*
                }
            }
        }

        #[automatically_derived]
        impl #bounded_impl_generics #ident #ty_generics #where_clause {
            #[doc = #fn_doc]
            #[must_use]
            #vis fn mock_data_with(overrides: #overrides #ty_generics) -> Self {
                let #overrides { #( #names, )* } = overrides;
                Self {
                    #( #inits, )*
                }
            }
        }

        #trait_impl
    }
}

//! Token emission for the `MockData` derive macro.
//!
//! Everything produced here sits next to the annotated type: a companion
//! overrides struct, inherent and trait impls. The annotated declaration
//! itself is never touched.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, parse_quote};

use super::crate_path::trait_path;
use super::introspect::TypeDeclaration;

mod product;
mod sum;

pub(crate) use product::emit_product;
pub(crate) use sum::emit_sum;

/// Copy `generics`, adding a `MockData` bound to every type parameter.
///
/// Generated factories may fill a field of type `T` through
/// `<T as MockData>::mock_data()`, so the impls that contain them carry the
/// bound. The overrides struct itself does not.
fn with_mock_data_bounds(generics: &Generics, krate: &TokenStream) -> Generics {
    let mock_data = trait_path(krate);
    let mut bounded = generics.clone();
    for param in bounded.type_params_mut() {
        param.bounds.push(parse_quote!(#mock_data));
    }
    bounded
}

/// Wrap `body` in `impl MockData for <decl>`.
fn mock_data_impl(decl: &TypeDeclaration, krate: &TokenStream, body: &TokenStream) -> TokenStream {
    let ident = &decl.ident;
    let mock_data = trait_path(krate);
    let generics = with_mock_data_bounds(&decl.generics, krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        #[automatically_derived]
        impl #impl_generics #mock_data for #ident #ty_generics #where_clause {
            fn mock_data() -> Self {
                #body
            }
        }
    }
}

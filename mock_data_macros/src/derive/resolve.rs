//! Default-value resolution for classified member types.
//!
//! Every signature maps to some expression. Sequences and optionals use
//! their empty literals, a fixed table covers scalar and well-known library
//! types, and everything else defers to the type's own `MockData` impl.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::classify::{TypeSignature, classify};
use super::crate_path::trait_path;
use super::parse::FieldAttrs;

const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

const FLOATS: &[&str] = &["f32", "f64"];

/// Produce the default expression for `signature`.
///
/// `krate` is the path generated code uses to reach the runtime crate (see
/// [`super::crate_path::resolve`]). The result is always an expression; it is
/// evaluated each time the factory runs, so timestamp and identifier defaults
/// differ between calls even though their source text never does.
pub(crate) fn resolve_default(signature: &TypeSignature, krate: &TokenStream) -> TokenStream {
    match signature {
        TypeSignature::Array(_) => quote! { ::std::vec::Vec::new() },
        TypeSignature::Optional(_) => quote! { ::core::option::Option::None },
        TypeSignature::Named { name, ty } => builtin_default(name).unwrap_or_else(|| {
            let mock_data = trait_path(krate);
            quote! { <#ty as #mock_data>::mock_data() }
        }),
    }
}

/// Default for a single field, honouring `#[mock_data(default = ...)]`.
pub(crate) fn resolve_field(ty: &Type, attrs: &FieldAttrs, krate: &TokenStream) -> TokenStream {
    attrs.default.as_ref().map_or_else(
        || resolve_default(&classify(ty), krate),
        |expr| quote! { #expr },
    )
}

/// Look `name` up in the builtin table.
///
/// Only the last path segment is known here, so every entry must type-check
/// for each common type sharing that name. `Duration` goes through `Default`
/// (std, `time` and `chrono` durations all default to zero) and clocks are
/// converted from the std reading. `Url`, `Uri` and `Uuid` have feature-gated
/// impls and take the opaque path.
fn builtin_default(name: &str) -> Option<TokenStream> {
    let tokens = match name {
        "bool" => quote! { false },
        n if INTEGERS.contains(&n) => quote! { 0 },
        n if FLOATS.contains(&n) => quote! { 0.0 },
        "Duration" => quote! { ::core::default::Default::default() },
        "String" => quote! { ::std::string::String::new() },
        "SystemTime" => quote! { ::std::time::SystemTime::now() },
        "Instant" => {
            quote! { ::core::convert::From::from(::std::time::Instant::now()) }
        }
        "DateTime" | "OffsetDateTime" => {
            quote! { ::core::convert::From::from(::std::time::SystemTime::now()) }
        }
        _ => return None,
    };
    Some(tokens)
}

//! Type-signature classification.
//!
//! These utilities perform shallow, purely syntactic inspection of
//! `syn::Type` values to recognise sequence wrappers (`Vec<T>`) and optional
//! wrappers (`Option<T>`). Anything else is an opaque named type identified by
//! its simple name.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Structural description of a member's declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TypeSignature {
    /// `Vec<T>` under any path prefix.
    Array(Box<TypeSignature>),
    /// `Option<T>` under any path prefix.
    Optional(Box<TypeSignature>),
    /// Any other type.
    Named {
        /// Simple name used for builtin lookup, e.g. `String` for
        /// `std::string::String` or `Foo` for `Foo<u8>`.
        name: String,
        /// The type exactly as declared, used for the opaque fallback.
        ty: Type,
    },
}

/// Classify a member type.
///
/// Never fails: types that are neither `Vec<T>` nor `Option<T>` fall through
/// to [`TypeSignature::Named`], generic arguments included.
pub(crate) fn classify(ty: &Type) -> TypeSignature {
    let ty = strip_groups(ty);
    if let Some(inner) = wrapper_inner(ty, "Vec") {
        return TypeSignature::Array(Box::new(classify(inner)));
    }
    if let Some(inner) = wrapper_inner(ty, "Option") {
        return TypeSignature::Optional(Box::new(classify(inner)));
    }
    TypeSignature::Named {
        name: simple_name(ty),
        ty: ty.clone(),
    }
}

/// Remove parentheses and invisible groups introduced by `macro_rules!`.
fn strip_groups(ty: &Type) -> &Type {
    match ty {
        Type::Paren(inner) => strip_groups(&inner.elem),
        Type::Group(inner) => strip_groups(&inner.elem),
        other => other,
    }
}

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the generic parameter if `ty` is the provided wrapper.
///
/// Only the final path segment is compared, so `std::option::Option<T>` and
/// `core::option::Option<T>` match just like `Option<T>`.
fn wrapper_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}

fn simple_name(ty: &Type) -> String {
    match ty {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last().map_or_else(
            || ty.to_token_stream().to_string(),
            |segment| segment.ident.to_string(),
        ),
        other => other.to_token_stream().to_string(),
    }
}

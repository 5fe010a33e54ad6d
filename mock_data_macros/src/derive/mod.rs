//! Expansion pipeline for `#[derive(MockData)]`.
//!
//! The driver classifies the annotated item, introspects its shape, resolves
//! a default for every member, and hands the results to the emitter. Each
//! stage lives in its own module:
//!
//! - [`classify`] turns a member type into a [`classify::TypeSignature`];
//! - [`resolve`] maps signatures to default expressions;
//! - [`introspect`] extracts members or the first variant;
//! - [`emit`] renders the generated items.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod classify;
mod crate_path;
mod emit;
mod error;
mod introspect;
mod parse;
mod resolve;
#[cfg(test)]
mod tests;

pub(crate) use error::ExpansionError;

use emit::{emit_product, emit_sum};
use introspect::{DeclarationKind, Shape, VariantFields, introspect};
use resolve::resolve_field;

/// Expand a single annotated declaration.
///
/// The expansion is atomic: it either returns the complete generated items or
/// an error, never a partial result.
///
/// # Errors
///
/// Returns [`ExpansionError`] when the item is not a supported struct or
/// enum, when an enum has no variants, or when an attribute is malformed.
pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream, ExpansionError> {
    match DeclarationKind::of(&input.data) {
        DeclarationKind::Unsupported => Err(ExpansionError::UnsupportedDeclaration {
            span: input.ident.span(),
        }),
        DeclarationKind::Product | DeclarationKind::Sum => {
            let decl = introspect(input)?;
            let krate = crate_path::resolve(decl.attrs.crate_path.as_ref());
            let tokens = match &decl.shape {
                Shape::Product(members) => {
                    let defaults: Vec<TokenStream> = members
                        .iter()
                        .map(|m| resolve_field(&m.ty, &m.attrs, &krate))
                        .collect();
                    emit_product(&decl, members, &defaults, &krate)
                }
                Shape::Sum(variant) => {
                    let defaults: Vec<TokenStream> = match &variant.fields {
                        VariantFields::Unit => Vec::new(),
                        VariantFields::Named(members) => members
                            .iter()
                            .map(|m| resolve_field(&m.ty, &m.attrs, &krate))
                            .collect(),
                        VariantFields::Unnamed(slots) => slots
                            .iter()
                            .map(|s| resolve_field(&s.ty, &s.attrs, &krate))
                            .collect(),
                    };
                    emit_sum(&decl, variant, &defaults, &krate)
                }
            };
            Ok(tokens)
        }
    }
}

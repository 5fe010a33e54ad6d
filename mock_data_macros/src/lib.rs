//! Procedural macros for `mock_data`.
//!
//! `#[derive(MockData)]` synthesises a default-instance factory for the
//! annotated type. Structs gain a `<Name>MockOverrides` companion and a
//! `mock_data_with` constructor whose every field has an overridable default;
//! enums return their first declared variant. Both implement
//! `mock_data::MockData`, so mock-able types compose: a field whose type is
//! not a recognised builtin is filled by calling that type's own
//! `MockData::mock_data()`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `mock_data::MockData`.
///
/// Supported items are structs with named fields, unit structs, and enums
/// with at least one variant. The generated code refers to the runtime crate
/// as `::mock_data` unless overridden with `#[mock_data(crate = "path")]`.
/// Individual defaults can be replaced with
/// `#[mock_data(default = <expr>)]` on a field.
#[proc_macro_derive(MockData, attributes(mock_data))]
pub fn derive_mock_data(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .map_err(derive::ExpansionError::into_syn_error)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

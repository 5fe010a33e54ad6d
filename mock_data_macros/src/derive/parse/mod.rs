//! Attribute parsing for the `MockData` derive macro.
//!
//! Two attribute positions are recognised:
//!
//! - on the type: `#[mock_data(crate = "path")]` overrides the path used to
//!   reach the runtime crate from generated code;
//! - on a field: `#[mock_data(default = <expr>)]` replaces the resolved
//!   default for that field.
//!
//! Unknown keys are rejected so misspelt attributes surface at compile time.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr};

mod literals;
#[cfg(test)]
mod tests;

use literals::lit_path;

const ATTRIBUTE: &str = "mock_data";

/// Container-level attributes recognised by `#[derive(MockData)]`.
#[derive(Default, Clone, Debug)]
pub(crate) struct ContainerAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[mock_data(crate = "fixtures")]`, generated code
    /// references the runtime through `fixtures::` instead of `::mock_data::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(MockData)]`.
#[derive(Default, Clone, Debug)]
pub(crate) struct FieldAttrs {
    /// Expression used instead of the resolved default.
    pub default: Option<Expr>,
}

/// Iterate all `#[mock_data(...)]` attributes once and apply a callback.
fn parse_mock_data<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, position: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown {position} attribute `{ATTRIBUTE}({key})`"))
}

/// Extracts `#[mock_data(...)]` metadata applied to a struct or enum.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_mock_data(attrs, |meta| {
        if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_path(meta, "crate")?);
            Ok(())
        } else {
            Err(unknown_key(meta, "container"))
        }
    })?;
    Ok(out)
}

/// Extracts `#[mock_data(...)]` metadata applied to a single field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_mock_data(attrs, |meta| {
        if meta.path.is_ident("default") {
            out.default = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(unknown_key(meta, "field"))
        }
    })?;
    Ok(out)
}

//! Literal values inside `#[mock_data(key = "...")]`.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Read `key = "..."` as a string literal.
///
/// Any other literal kind is reported at the literal's span as
/// "`key` must be a string".
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

/// Read `key = "a::b"` as a path written inside a string literal.
///
/// Parse failures point at the string literal rather than at the attribute.
pub(crate) fn lit_path(meta: &ParseNestedMeta, key: &str) -> syn::Result<syn::Path> {
    let s = lit_str(meta, key)?;
    s.parse::<syn::Path>()
        .map_err(|err| syn::Error::new(s.span(), format!("{key} must name a path: {err}")))
}

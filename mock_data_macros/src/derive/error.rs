//! Failures reported by `#[derive(MockData)]`.

use proc_macro2::Span;
use thiserror::Error;

/// Reasons an expansion can be refused.
///
/// Every variant is detected before any code is emitted, so a failed
/// expansion never leaves partial items behind.
#[derive(Debug, Error)]
pub(crate) enum ExpansionError {
    /// The derive was applied to a tuple struct or a union.
    #[error(
        "MockData can only be derived for structs with named fields, unit structs, and enums"
    )]
    UnsupportedDeclaration {
        /// Location of the offending type name.
        span: Span,
    },

    /// The derive was applied to an enum without variants.
    #[error("MockData cannot be derived for an enum without variants")]
    EnumerationEmpty {
        /// Location of the offending type name.
        span: Span,
    },

    /// A `#[mock_data(...)]` attribute could not be parsed.
    #[error(transparent)]
    Attribute(#[from] syn::Error),
}

impl ExpansionError {
    /// Convert into a spanned `syn::Error` for reporting through
    /// `compile_error!`.
    pub(crate) fn into_syn_error(self) -> syn::Error {
        match self {
            Self::UnsupportedDeclaration { span } | Self::EnumerationEmpty { span } => {
                syn::Error::new(span, self)
            }
            Self::Attribute(err) => err,
        }
    }
}

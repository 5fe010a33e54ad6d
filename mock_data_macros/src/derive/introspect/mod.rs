//! Declaration introspection for the `MockData` derive macro.
//!
//! This module gathers the type identifier, generics, member list, and all
//! attribute metadata in one pass so expansion can fail fast with useful
//! errors before any code is generated.

use syn::{Data, DataEnum, DeriveInput, Field, Fields, Generics, Ident, Type, Visibility};

use super::error::ExpansionError;
use super::parse::{ContainerAttrs, FieldAttrs, parse_container_attrs, parse_field_attrs};

/// Coarse classification of the annotated item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeclarationKind {
    /// A struct with named fields, or a unit struct.
    Product,
    /// An enum.
    Sum,
    /// Tuple structs and unions.
    Unsupported,
}

impl DeclarationKind {
    /// Classify the body of a derive input.
    pub(crate) const fn of(data: &Data) -> Self {
        match data {
            Data::Struct(data) => match data.fields {
                Fields::Named(_) | Fields::Unit => Self::Product,
                Fields::Unnamed(_) => Self::Unsupported,
            },
            Data::Enum(_) => Self::Sum,
            Data::Union(_) => Self::Unsupported,
        }
    }
}

/// The shape of an annotated type, ready for emission.
#[derive(Clone, Debug)]
pub(crate) struct TypeDeclaration {
    pub ident: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub attrs: ContainerAttrs,
    pub shape: Shape,
}

#[derive(Clone, Debug)]
pub(crate) enum Shape {
    /// Named fields in declaration order.
    Product(Vec<Member>),
    /// The first declared variant; later variants play no part.
    Sum(CanonicalVariant),
}

/// A named field of a struct or struct-like variant.
#[derive(Clone, Debug)]
pub(crate) struct Member {
    pub ident: Ident,
    pub vis: Visibility,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

/// A positional field of a tuple-like variant.
#[derive(Clone, Debug)]
pub(crate) struct Positional {
    pub ty: Type,
    pub attrs: FieldAttrs,
}

#[derive(Clone, Debug)]
pub(crate) struct CanonicalVariant {
    pub ident: Ident,
    pub fields: VariantFields,
}

#[derive(Clone, Debug)]
pub(crate) enum VariantFields {
    Unit,
    Named(Vec<Member>),
    Unnamed(Vec<Positional>),
}

/// Extract the declaration shape from `input`.
///
/// # Errors
///
/// Returns [`ExpansionError::UnsupportedDeclaration`] for tuple structs and
/// unions, [`ExpansionError::EnumerationEmpty`] for enums without variants,
/// and [`ExpansionError::Attribute`] when a `#[mock_data(...)]` attribute is
/// malformed.
pub(crate) fn introspect(input: &DeriveInput) -> Result<TypeDeclaration, ExpansionError> {
    let attrs = parse_container_attrs(&input.attrs)?;
    let shape = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Shape::Product(members(named.named.iter())?),
            Fields::Unit => Shape::Product(Vec::new()),
            Fields::Unnamed(_) => return Err(unsupported(&input.ident)),
        },
        Data::Enum(data) => Shape::Sum(first_variant(data, &input.ident)?),
        Data::Union(_) => return Err(unsupported(&input.ident)),
    };
    Ok(TypeDeclaration {
        ident: input.ident.clone(),
        vis: input.vis.clone(),
        generics: input.generics.clone(),
        attrs,
        shape,
    })
}

fn unsupported(ident: &Ident) -> ExpansionError {
    ExpansionError::UnsupportedDeclaration { span: ident.span() }
}

fn members<'a>(fields: impl Iterator<Item = &'a Field>) -> Result<Vec<Member>, ExpansionError> {
    fields
        .map(|field| -> Result<Member, ExpansionError> {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            Ok(Member {
                ident,
                vis: field.vis.clone(),
                ty: field.ty.clone(),
                attrs: parse_field_attrs(&field.attrs)?,
            })
        })
        .collect()
}

fn positionals<'a>(
    fields: impl Iterator<Item = &'a Field>,
) -> Result<Vec<Positional>, ExpansionError> {
    fields
        .map(|field| -> Result<Positional, ExpansionError> {
            Ok(Positional {
                ty: field.ty.clone(),
                attrs: parse_field_attrs(&field.attrs)?,
            })
        })
        .collect()
}

/// Pick the first variant and collect its fields.
///
/// Field attributes on the remaining variants are still parsed, so a
/// malformed `#[mock_data(...)]` anywhere in the enum is reported.
fn first_variant(data: &DataEnum, ident: &Ident) -> Result<CanonicalVariant, ExpansionError> {
    let mut variants = data.variants.iter();
    let variant = variants
        .next()
        .ok_or_else(|| ExpansionError::EnumerationEmpty { span: ident.span() })?;
    for field in variants.flat_map(|later| later.fields.iter()) {
        parse_field_attrs(&field.attrs)?;
    }
    let fields = match &variant.fields {
        Fields::Unit => VariantFields::Unit,
        Fields::Named(named) => VariantFields::Named(members(named.named.iter())?),
        Fields::Unnamed(unnamed) => VariantFields::Unnamed(positionals(unnamed.unnamed.iter())?),
    };
    Ok(CanonicalVariant {
        ident: variant.ident.clone(),
        fields,
    })
}

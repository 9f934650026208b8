//! Input parsing for the `Melt` derive macro.
//!
//! Collects the container attributes, decides whether the input is a record
//! or a leaf, and gathers the exposed fields of records in declaration order.
//! Unknown `#[melt(...)]` keys are rejected so typos fail loudly.

use syn::ext::IdentExt as _;
use syn::{Attribute, Data, DeriveInput, Fields, GenericParam, LitStr};

/// Container-level `#[melt(...)]` settings.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub leaf: bool,
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[melt(...)]` settings.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub read_only: bool,
}

/// A record field exposed to matching.
pub(crate) struct RecordField {
    pub ident: syn::Ident,
    /// Name used for matching; raw identifiers lose their `r#` prefix.
    pub name: String,
    pub ty: syn::Type,
    pub read_only: bool,
}

/// What the derive generates.
pub(crate) enum Shape {
    Record(Vec<RecordField>),
    Leaf,
}

/// Everything the generators need from the user's type.
pub(crate) struct MeltInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub crate_path: Option<syn::Path>,
    pub shape: Shape,
}

impl MeltInput {
    /// Parse the derive input, failing fast on unsupported shapes.
    pub(crate) fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let attrs = parse_container_attrs(&input.attrs)?;
        reject_lifetimes(&input.generics)?;

        let shape = if attrs.leaf {
            Shape::Leaf
        } else {
            Shape::Record(record_fields(input)?)
        };

        Ok(Self {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            crate_path: attrs.crate_path,
            shape,
        })
    }
}

/// Iterate all `#[melt(...)]` attributes once and apply a callback.
fn parse_melt<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("melt")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts `#[melt(...)]` metadata applied to the container.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_melt(attrs, |meta| {
        if meta.path.is_ident("leaf") {
            out.leaf = true;
            Ok(())
        } else if meta.path.is_ident("crate") {
            let lit: LitStr = meta.value()?.parse()?;
            out.crate_path = Some(lit.parse()?);
            Ok(())
        } else {
            Err(meta.error("unknown melt container attribute; expected `leaf` or `crate`"))
        }
    })?;
    Ok(out)
}

/// Extracts `#[melt(...)]` metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_melt(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else if meta.path.is_ident("read_only") {
            out.read_only = true;
            Ok(())
        } else {
            Err(meta.error("unknown melt field attribute; expected `skip` or `read_only`"))
        }
    })?;
    Ok(out)
}

// Records are `'static` through `Melt: Any`.
fn reject_lifetimes(generics: &syn::Generics) -> syn::Result<()> {
    generics.params.iter().try_for_each(|param| match param {
        GenericParam::Lifetime(lifetime) => Err(syn::Error::new_spanned(
            lifetime,
            "Melt cannot be derived for types with lifetime parameters",
        )),
        GenericParam::Type(_) | GenericParam::Const(_) => Ok(()),
    })
}

fn record_fields(input: &DeriveInput) -> syn::Result<Vec<RecordField>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Melt records require named fields; use #[melt(leaf)] to assign tuple structs whole",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Melt cannot merge enums field by field; use #[melt(leaf)] to assign them whole",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Melt cannot be derived for unions",
            ));
        }
    };

    let mut out = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        out.push(RecordField {
            name: ident.unraw().to_string(),
            ident,
            ty: field.ty.clone(),
            read_only: attrs.read_only,
        });
    }
    Ok(out)
}

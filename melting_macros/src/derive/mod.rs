//! Expansion pipeline for `#[derive(Melt)]`: parse, then generate.

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;
pub(crate) mod type_label;

use proc_macro2::TokenStream;
use syn::DeriveInput;

use self::parse::{MeltInput, Shape};

/// Expand a derive input into the `Melt` (and, for records, `Record`)
/// implementations.
///
/// # Errors
///
/// Returns a spanned [`syn::Error`] for unsupported inputs or malformed
/// `#[melt(...)]` attributes.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = MeltInput::parse(input)?;
    let krate = crate_path::resolve(parsed.crate_path.as_ref());
    Ok(match &parsed.shape {
        Shape::Leaf => generate::leaf_impl(&parsed, &krate),
        Shape::Record(fields) => generate::record_impls(&parsed, fields, &krate),
    })
}

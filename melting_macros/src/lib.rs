//! Procedural macros for `melting`.
//!
//! `#[derive(Melt)]` turns a struct with named fields into a structured
//! record: it emits a `const` field table and name-based accessors so the
//! matcher in `melting` can pair fields by name at runtime. With
//! `#[melt(leaf)]` any struct or enum instead becomes a leaf that is assigned
//! whole from a clone of a source of the same type.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `melting::Melt`.
///
/// Container attributes:
///
/// - `#[melt(leaf)]`: assign the value whole instead of merging its fields.
///   Requires `Clone`.
/// - `#[melt(crate = "path")]`: refer to `melting` through another path when
///   the dependency is renamed.
///
/// Field attributes:
///
/// - `#[melt(skip)]`: hide the field from matching entirely.
/// - `#[melt(read_only)]`: the field can be read as a merge source, but a
///   merge writing to it fails with `MeltError::NotSettable`.
#[proc_macro_derive(Melt, attributes(melt))]
pub fn derive_melt(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

//! Prefix for every `melting` item named in generated impls.
//!
//! Generated code spells `::melting::Melt`, `::melting::Record` and so on.
//! A crate that re-exports `melting` under another name passes that name
//! with `#[melt(crate = "...")]`, and the prefix is taken verbatim.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens to place before `::Melt`, `::Record`, `::Field` and
/// `::assign_cloned` in generated impls.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::melting }, |path| quote! { #path })
}

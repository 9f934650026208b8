//! Token generation for `#[derive(Melt)]`.
//!
//! Records get a `Melt` impl exposing their `Record` view plus the `Record`
//! impl itself: a `const` field table and `match`-based accessors keyed by
//! field name. Leaves get a `Melt` impl delegating to `assign_cloned`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, parse_quote};

use super::parse::{MeltInput, RecordField};
use super::type_label::type_label;

/// Clone the input generics, adding `'static` bounds on type parameters and
/// any `extra` predicates.
fn bounded_generics(
    generics: &syn::Generics,
    extra: impl IntoIterator<Item = syn::WherePredicate>,
) -> syn::Generics {
    let mut bounded = generics.clone();
    let statics: Vec<syn::WherePredicate> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                Some(parse_quote! { #ident: 'static })
            }
            GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
        })
        .collect();
    let clause = bounded.make_where_clause();
    clause.predicates.extend(statics);
    clause.predicates.extend(extra);
    bounded
}

fn has_type_params(generics: &syn::Generics) -> bool {
    generics
        .params
        .iter()
        .any(|param| matches!(param, GenericParam::Type(_)))
}

/// Generate the `Melt` and `Record` impls for a record.
pub(crate) fn record_impls(
    input: &MeltInput,
    fields: &[RecordField],
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    // Concrete field types are checked by the accessor casts below, which
    // point at the offending field. Generic ones need an explicit bound.
    let field_bounds: Vec<syn::WherePredicate> = if has_type_params(&input.generics) {
        fields
            .iter()
            .map(|field| {
                let ty = &field.ty;
                parse_quote! { #ty: #krate::Melt }
            })
            .collect()
    } else {
        Vec::new()
    };
    let generics = bounded_generics(&input.generics, field_bounds);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let table = fields.iter().map(|field| field_entry(field, krate));
    let readers = fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            #name => ::core::option::Option::Some(&self.#member as &dyn #krate::Melt),
        }
    });
    let writers = fields.iter().filter(|field| !field.read_only).map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            #name => ::core::option::Option::Some(&mut self.#member as &mut dyn #krate::Melt),
        }
    });

    quote! {
        impl #impl_generics #krate::Melt for #ident #ty_generics #where_clause {
            fn as_record(&self) -> ::core::option::Option<&dyn #krate::Record> {
                ::core::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn #krate::Record> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn fields(&self) -> &'static [#krate::Field] {
                const FIELDS: &[#krate::Field] = &[ #( #table ),* ];
                FIELDS
            }

            fn field_value(&self, name: &str) -> ::core::option::Option<&dyn #krate::Melt> {
                match name {
                    #( #readers )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_value_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn #krate::Melt> {
                match name {
                    #( #writers )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Emit the `Field` constructor for one table entry.
fn field_entry(field: &RecordField, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let label = type_label(&field.ty);
    if field.read_only {
        quote! { #krate::Field::new(#name, #label).read_only() }
    } else {
        quote! { #krate::Field::new(#name, #label) }
    }
}

/// Generate the `Melt` impl for a leaf.
pub(crate) fn leaf_impl(input: &MeltInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let clone_bound: syn::WherePredicate = parse_quote! { Self: ::core::clone::Clone };
    let generics = bounded_generics(&input.generics, [clone_bound]);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Melt for #ident #ty_generics #where_clause {
            fn assign(&mut self, source: &dyn #krate::Melt) -> bool {
                #krate::assign_cloned(self, source)
            }
        }
    }
}

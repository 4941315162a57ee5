//! Procedural macros for dynlist

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Leave the variant uncategorized
    #[darling(default)]
    skip_category: bool,
}

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(current);
            current = String::new();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Infer a category from the leading noun of a variant name.
///
/// `ItemAdd` and `ItemRemoveLast` land in `"item"`, `WarningDismiss` in
/// `"warning"`. Single-word variants such as `Quit` stay uncategorized.
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    if parts.len() < 2 {
        return None;
    }
    Some(parts[0].to_lowercase())
}

fn match_pattern(name: &syn::Ident, variant: &ActionVariant) -> TokenStream2 {
    let ident = &variant.ident;
    match variant.fields.style {
        darling::ast::Style::Unit => quote! { #name::#ident },
        darling::ast::Style::Tuple => quote! { #name::#ident(..) },
        darling::ast::Style::Struct => quote! { #name::#ident { .. } },
    }
}

/// Derive macro for the `dynlist_core::Action` trait
///
/// Generates `name()` returning the variant name and `category()` returning
/// the lowercased leading word of the variant name.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum ListAction {
///     ItemAdd,
///     WarningDismiss,
///     #[action(category = "app")]
///     Quit,
/// }
///
/// assert_eq!(ListAction::ItemAdd.name(), "ItemAdd");
/// assert_eq!(ListAction::ItemAdd.category(), Some("item"));
/// assert_eq!(ListAction::Quit.category(), Some("app"));
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let pattern = match_pattern(name, v);
        let variant_str = v.ident.to_string();
        quote! { #pattern => #variant_str }
    });

    let category_arms = variants.iter().map(|v| {
        let pattern = match_pattern(name, v);
        let category = if v.skip_category {
            None
        } else {
            v.category
                .clone()
                .or_else(|| infer_category(&v.ident.to_string()))
        };
        match category {
            Some(c) => quote! { #pattern => ::core::option::Option::Some(#c) },
            None => quote! { #pattern => ::core::option::Option::None },
        }
    });

    let expanded = quote! {
        impl ::dynlist_core::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }

            fn category(&self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#category_arms),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

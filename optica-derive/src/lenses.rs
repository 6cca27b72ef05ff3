//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! This module contains the procedural macro implementation that generates
//! lens, getter, setter and optional constructors for struct fields.

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::{
    Data, DeriveInput, Field, Fields, GenericArgument, GenericParam, Generics, Ident,
    PathArguments, Type, TypePath, parse_macro_input,
};

use crate::with_static_type_parameters;

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_lenses(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates field optic methods for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let type_parameters: Vec<Ident> = generics
                .params
                .iter()
                .filter_map(|parameter| match parameter {
                    GenericParam::Type(type_parameter) => Some(type_parameter.ident.clone()),
                    GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
                })
                .collect();

            let mut methods = Vec::new();
            for field in &named_fields.named {
                let Some(field_name) = field.ident.as_ref() else {
                    continue;
                };
                match is_skipped(field) {
                    Ok(true) => {}
                    Ok(false) => {
                        methods.push(generate_field_optics(field_name, field, &type_parameters));
                    }
                    Err(error) => return error.to_compile_error(),
                }
            }

            let generics = with_static_type_parameters(generics);
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// Returns `true` when the field carries `#[lenses(skip)]`.
fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skipped = false;
    for attribute in field.attrs.iter().filter(|attribute| attribute.path().is_ident("lenses")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skipped = true;
                Ok(())
            } else {
                Err(meta.error("unsupported lenses attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skipped)
}

/// Returns `true` if any token of `tokens` names one of `type_parameters`.
fn mentions_type_parameter(tokens: TokenStream2, type_parameters: &[Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => type_parameters.contains(&ident),
        TokenTree::Group(group) => mentions_type_parameter(group.stream(), type_parameters),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

/// `where T: Clone` for a type built from the struct's type parameters.
///
/// Concrete types get no bound: a bound on a concrete type is checked
/// eagerly and would reject the whole impl when that type is not `Clone`.
fn clone_bound(bounded_type: &Type, type_parameters: &[Ident]) -> TokenStream2 {
    if mentions_type_parameter(bounded_type.to_token_stream(), type_parameters) {
        quote! { where #bounded_type: ::core::clone::Clone, }
    } else {
        quote! {}
    }
}

/// Generates `_lens`, `_getter`, `_setter` and, for `Option` fields,
/// `_optional` for one field.
fn generate_field_optics(field_name: &Ident, field: &Field, type_parameters: &[Ident]) -> TokenStream2 {
    let field_type = &field.ty;
    let field_bound = clone_bound(field_type, type_parameters);
    let lens_name = format_ident!("{}_lens", field_name);
    let getter_name = format_ident!("{}_getter", field_name);
    let setter_name = format_ident!("{}_setter", field_name);

    let lens_doc = format!("Returns a lens focusing on the `{field_name}` field.");
    let getter_doc = format!("Returns a getter reading the `{field_name}` field.");
    let setter_doc = format!("Returns a setter writing the `{field_name}` field.");

    let optional = option_payload(field_type).map(|payload_type| {
        let optional_name = format_ident!("{}_optional", field_name);
        let optional_doc = format!(
            "Returns an optional focusing on the `{field_name}` payload; setting it stores `Some`."
        );
        let payload_bound = clone_bound(payload_type, type_parameters);
        quote! {
            #[doc = #optional_doc]
            #[must_use]
            pub fn #optional_name() -> ::optica::optics::Optional<Self, #payload_type>
            #payload_bound
            {
                ::optica::optics::Optional::new(
                    |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                    |mut source: Self, value: #payload_type| {
                        source.#field_name = ::core::option::Option::Some(value);
                        source
                    },
                )
            }
        }
    });

    quote! {
        #[doc = #lens_doc]
        #[must_use]
        pub fn #lens_name() -> ::optica::optics::Lens<Self, #field_type>
        #field_bound
        {
            ::optica::optics::Lens::new(
                |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }

        #[doc = #getter_doc]
        #[must_use]
        pub fn #getter_name() -> ::optica::optics::Getter<Self, #field_type>
        #field_bound
        {
            ::core::convert::From::from(Self::#lens_name())
        }

        #[doc = #setter_doc]
        #[must_use]
        pub fn #setter_name() -> ::optica::optics::Setter<Self, #field_type>
        #field_bound
        {
            ::core::convert::From::from(Self::#lens_name())
        }

        #optional
    }
}

/// Returns `T` when `field_type` is spelled `Option<T>`.
///
/// Matching is syntactic: `std::option::Option<T>` is recognised, a type
/// alias for `Option` is not.
fn option_payload(field_type: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = field_type else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.first() {
        Some(GenericArgument::Type(payload_type)) if arguments.args.len() == 1 => {
            Some(payload_type)
        }
        _ => None,
    }
}

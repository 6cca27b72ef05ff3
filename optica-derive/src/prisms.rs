//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! This module contains the procedural macro implementation that generates
//! prism constructors for enum variants. Every variant shape reduces to one
//! payload: `()` for a unit variant, the field type for a single field, and a
//! tuple in declaration order otherwise.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

use crate::with_static_type_parameters;

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, data_enum.variants.iter())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants.map(generate_variant_prism).collect();

    let generics = with_static_type_parameters(generics);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let method_doc = format!("Returns a prism matching the `{variant_name}` variant.");

    let field_types: Vec<&Type> = variant.fields.iter().map(|field| &field.ty).collect();
    let bindings: Vec<Ident> = (0..field_types.len())
        .map(|index| format_ident!("field_{}", index))
        .collect();

    let shape = match &variant.fields {
        Fields::Unit => quote! { Self::#variant_name },
        Fields::Unnamed(_) => quote! { Self::#variant_name(#(#bindings),*) },
        Fields::Named(fields) => {
            let field_names = fields.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { Self::#variant_name { #(#field_names: #bindings),* } }
        }
    };

    let any_payload = match &variant.fields {
        Fields::Unit => quote! { Self::#variant_name },
        Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
        Fields::Named(_) => quote! { Self::#variant_name { .. } },
    };

    let (payload_type, payload_value, payload_pattern) = match field_types.as_slice() {
        [] => (quote! { () }, quote! { () }, quote! { () }),
        [single_type] => {
            let binding = &bindings[0];
            (
                quote! { #single_type },
                quote! { ::core::clone::Clone::clone(#binding) },
                quote! { #binding },
            )
        }
        _ => (
            quote! { (#(#field_types),*) },
            quote! { (#(::core::clone::Clone::clone(#bindings)),*) },
            quote! { (#(#bindings),*) },
        ),
    };

    let clone_bounds = if field_types.is_empty() {
        quote! {}
    } else {
        quote! { where #(#field_types: ::core::clone::Clone),* }
    };

    quote! {
        #[doc = #method_doc]
        #[must_use]
        pub fn #method_name() -> ::optica::optics::Prism<Self, #payload_type> #clone_bounds {
            ::optica::optics::Prism::with_matcher(
                |source: &Self| match source {
                    #shape => ::core::option::Option::Some(#payload_value),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |#payload_pattern: #payload_type| #shape,
                |source: &Self| ::core::matches!(source, #any_payload),
            )
        }
    }
}

/// Converts a `CamelCase` variant name to `snake_case`, keeping acronyms
/// together (`HTTPRequest` becomes `http_request`).
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, character) in characters.iter().copied().enumerate() {
        if character.is_uppercase() && index > 0 {
            let previous = characters[index - 1];
            let next_is_lowercase = characters
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                result.push('_');
            }
        }
        result.extend(character.to_lowercase());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("MouseClick", "mouse_click")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("A", "a")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    #[case(parse_quote!(Idle), "idle_prism", "Prism < Self , () >")]
    #[case(parse_quote!(KeyPress(char)), "key_press_prism", "Prism < Self , char >")]
    #[case(parse_quote!(Move(i32, i32)), "move_prism", "Prism < Self , (i32 , i32) >")]
    #[case(parse_quote!(Click { x: i32, y: u8 }), "click_prism", "Prism < Self , (i32 , u8) >")]
    fn test_variant_prism_signature(
        #[case] variant: Variant,
        #[case] method_name: &str,
        #[case] return_type: &str,
    ) {
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains(method_name));
        assert!(generated.contains(return_type));
    }

    #[rstest]
    #[case(parse_quote!(Idle), "matches ! (source , Self :: Idle)")]
    #[case(parse_quote!(KeyPress(char)), "matches ! (source , Self :: KeyPress (..))")]
    #[case(parse_quote!(Click { x: i32, y: u8 }), "matches ! (source , Self :: Click { .. })")]
    fn test_variant_matcher_binds_nothing(#[case] variant: Variant, #[case] matcher: &str) {
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains(matcher), "{generated}");
    }
}

//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
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
fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let generic = generics.type_params().next().is_some();
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant, generic))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// The pieces that differ between variant shapes.
struct VariantShape {
    focus_type: TokenStream2,
    pattern: TokenStream2,
    focus: TokenStream2,
    rebuild: TokenStream2,
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;
    match &variant.fields {
        Fields::Unit => VariantShape {
            focus_type: quote! { () },
            pattern: quote! { Self::#variant_name },
            focus: quote! { () },
            rebuild: quote! { |(): ()| Self::#variant_name },
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            VariantShape {
                focus_type: quote! { #field_type },
                pattern: quote! { Self::#variant_name(value) },
                focus: quote! { value },
                rebuild: quote! { |value: #field_type| Self::#variant_name(value) },
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<_> = fields.unnamed.iter().map(|f| &f.ty).collect();
            let vars: Vec<_> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            VariantShape {
                focus_type: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name(#(#vars),*) },
                focus: quote! { (#(#vars),*) },
                rebuild: quote! {
                    |(#(#vars),*): (#(#field_types),*)| Self::#variant_name(#(#vars),*)
                },
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<_> =
                fields.named.iter().filter_map(|f| f.ident.as_ref()).collect();
            let field_types: Vec<_> = fields.named.iter().map(|f| &f.ty).collect();
            VariantShape {
                focus_type: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                focus: quote! { (#(#field_names),*) },
                rebuild: quote! {
                    |(#(#field_names),*): (#(#field_types),*)| {
                        Self::#variant_name { #(#field_names),* }
                    }
                },
            }
        }
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant, generic: bool) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let VariantShape {
        focus_type,
        pattern,
        focus,
        rebuild,
    } = variant_shape(variant);
    // Only generic enums need the field bounds spelled out.
    let field_bounds: Vec<_> = if generic {
        variant.fields.iter().map(|field| &field.ty).collect()
    } else {
        Vec::new()
    };

    quote! {
        /// Returns a prism focusing on the `#variant_name` variant.
        #[inline]
        #[must_use]
        pub fn #method_name() -> ::kaleido::optics::SimpleOptic<Self, #focus_type>
        where
            Self: 'static,
            #(#field_bounds: 'static,)*
        {
            ::kaleido::optics::prism(
                |source: Self| match source {
                    #pattern => ::kaleido::control::Either::Right(#focus),
                    #[allow(unreachable_patterns)]
                    other => ::kaleido::control::Either::Left(other),
                },
                #rebuild,
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attr;

pub fn derive_facet(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "Facet derive only supports fieldless enums",
        ));
    };

    let mut variants = Vec::new();
    let mut labels = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "Facet variants cannot carry data",
            ));
        }

        let label = attr::string_arg(&variant.attrs, "facet", "rename")?
            .unwrap_or_else(|| variant.ident.to_string());

        if labels.contains(&label) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate facet label `{}`", label),
            ));
        }
        variants.push(&variant.ident);
        labels.push(label);
    }

    Ok(quote! {
        impl dealdesk::Facet for #name {
            const VALUES: &'static [&'static str] = &[#(#labels),*];

            fn as_str(&self) -> &'static str {
                match self {
                    #( Self::#variants => #labels, )*
                }
            }

            fn parse(value: &str) -> ::core::option::Option<Self> {
                match value {
                    #( #labels => Some(Self::#variants), )*
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(dealdesk::Facet::as_str(self))
            }
        }
    })
}

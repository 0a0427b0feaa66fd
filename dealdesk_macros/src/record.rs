use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use crate::attr;

struct FacetField {
    name: String,
    ident: Ident,
    ty: Type,
}

#[derive(Default)]
struct FieldRoles {
    id: Option<Ident>,
    search: Vec<Ident>,
    facets: Vec<FacetField>,
    required: Vec<Ident>,
}

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let collection = extract_collection(input)?;
    let roles = extract_roles(input)?;

    let id_field = roles.id;
    let search = &roles.search;
    let required = &roles.required;
    let required_names: Vec<String> = required.iter().map(|i| i.to_string()).collect();

    let facet_names: Vec<&str> = roles.facets.iter().map(|f| f.name.as_str()).collect();
    let facet_idents: Vec<&Ident> = roles.facets.iter().map(|f| &f.ident).collect();
    let facet_tys: Vec<&Type> = roles.facets.iter().map(|f| &f.ty).collect();

    Ok(quote! {
        impl dealdesk::Record for #name {
            const COLLECTION: &'static str = #collection;

            fn id(&self) -> &str {
                &self.#id_field
            }

            fn search_text(&self) -> Vec<&str> {
                let mut out = Vec::new();
                #( dealdesk::SearchField::collect_into(&self.#search, &mut out); )*
                out
            }

            fn facet(&self, name: &str) -> ::core::option::Option<&'static str> {
                match name {
                    #( #facet_names => Some(dealdesk::Facet::as_str(&self.#facet_idents)), )*
                    _ => None,
                }
            }

            fn set_facet(&mut self, name: &str, value: &str) -> ::core::result::Result<(), dealdesk::FacetError> {
                let _ = value;
                match name {
                    #(
                        #facet_names => {
                            self.#facet_idents = <#facet_tys as dealdesk::Facet>::parse(value)
                                .ok_or_else(|| dealdesk::FacetError::InvalidValue {
                                    facet: name.to_string(),
                                    value: value.to_string(),
                                })?;
                            Ok(())
                        }
                    )*
                    _ => Err(dealdesk::FacetError::UnknownFacet {
                        collection: #collection,
                        facet: name.to_string(),
                    }),
                }
            }

            fn facet_names() -> &'static [&'static str] {
                &[#(#facet_names),*]
            }

            fn facet_values(name: &str) -> ::core::option::Option<&'static [&'static str]> {
                match name {
                    #( #facet_names => Some(<#facet_tys as dealdesk::Facet>::VALUES), )*
                    _ => None,
                }
            }

            fn missing_required(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                #(
                    if dealdesk::RequiredField::is_blank(&self.#required) {
                        missing.push(#required_names);
                    }
                )*
                missing
            }
        }
    })
}

fn extract_collection(input: &DeriveInput) -> syn::Result<String> {
    let collection = attr::string_arg(&input.attrs, "record", "collection")?;
    Ok(collection.unwrap_or_else(|| attr::default_collection(&input.ident)))
}

fn extract_roles(input: &DeriveInput) -> syn::Result<FieldRoles> {
    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Record derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record derive only supports structs",
            ))
        }
    };

    let mut roles = FieldRoles::default();
    let mut fallback_id = None;

    for field in fields {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        if ident == "id" {
            fallback_id = Some(ident.clone());
        }

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    roles.id = Some(ident.clone());
                } else if meta.path.is_ident("search") {
                    roles.search.push(ident.clone());
                } else if meta.path.is_ident("required") {
                    roles.required.push(ident.clone());
                } else if meta.path.is_ident("facet") {
                    let name = if meta.input.peek(syn::Token![=]) {
                        let value: LitStr = meta.value()?.parse()?;
                        value.value()
                    } else {
                        ident.to_string()
                    };
                    roles.facets.push(FacetField {
                        name,
                        ident: ident.clone(),
                        ty: field.ty.clone(),
                    });
                } else {
                    return Err(meta.error("expected one of `id`, `search`, `facet`, `required`"));
                }
                Ok(())
            })?;
        }
    }

    if roles.id.is_none() {
        roles.id = fallback_id;
    }
    if roles.id.is_none() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive: no field marked with #[record(id)] and no field named `id`",
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for facet in &roles.facets {
        if !seen.insert(facet.name.clone()) {
            return Err(syn::Error::new_spanned(
                &facet.ident,
                format!("duplicate facet name `{}`", facet.name),
            ));
        }
    }

    Ok(roles)
}

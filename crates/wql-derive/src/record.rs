use crate::attrs::{ContainerAttrs, FieldAttrs};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Visibility, ext::IdentExt};

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic structs",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "Record can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "Record can only be derived for structs with named fields",
        ));
    };

    let container = ContainerAttrs::parse(&input.attrs)?;
    let record_name = container
        .name
        .clone()
        .unwrap_or_else(|| ident.unraw().to_string());

    let mut models = Vec::new();
    let mut assign_arms = Vec::new();

    for (index, field) in named.named.iter().enumerate() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let attrs = FieldAttrs::parse(&field.attrs)?;

        let raw = field_ident.unraw().to_string();
        let source_name = match (attrs.rename, container.rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(&raw),
            (None, None) => raw,
        };
        let settable = matches!(field.vis, Visibility::Public(_));

        models.push(quote! {
            ::wql::core::model::FieldModel::new(
                #source_name,
                <#ty as ::wql::core::traits::FieldType>::KIND,
                <#ty as ::wql::core::traits::FieldType>::OPTIONAL,
                #settable,
            )
        });
        assign_arms.push(quote! {
            #index => ::wql::core::traits::FieldType::assign(&mut self.#field_ident, value),
        });
    }

    Ok(quote! {
        impl ::wql::core::traits::Record for #ident {
            const MODEL: &'static ::wql::core::model::RecordModel =
                &::wql::core::model::RecordModel {
                    name: #record_name,
                    fields: &[#(#models),*],
                };

            fn assign(&mut self, index: usize, value: ::wql::core::bind::Coerced) {
                match index {
                    #(#assign_arms)*
                    _ => {}
                }
            }
        }

        impl ::wql::core::traits::Element for #ident {
            type Record = Self;
            const SHAPE: ::wql::core::traits::ElementShape =
                ::wql::core::traits::ElementShape::Record;

            fn from_record(record: Self) -> Self {
                record
            }
        }

        impl ::wql::core::traits::QueryTarget for #ident {
            fn record_model() -> ::core::option::Option<&'static ::wql::core::model::RecordModel> {
                ::core::option::Option::Some(<Self as ::wql::core::traits::Record>::MODEL)
            }
        }
    })
}

//! Code generation for the Fields derive

use super::parse::SchemaAttrs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, FieldsNamed, parse_quote};

/// Generate the `Fields` implementation and `Value` conversions for a struct.
///
/// # Errors
///
/// Returns an error if:
/// - Input is not a struct with named fields
/// - Field attributes are invalid
pub(super) fn generate_fields(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();
    let fields = require_named_struct(input)?;

    let mut entries = Vec::new();
    let mut generics = input.generics.clone();

    for field in &fields.named {
        let attrs = SchemaAttrs::from_attributes(&field.attrs)?;
        let Some(tag) = attrs.enumerated_tag() else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;

        if !input.generics.params.is_empty() {
            generics.make_where_clause().predicates.push(parse_quote! {
                #ty: ::core::clone::Clone
            });
            generics.make_where_clause().predicates.push(parse_quote! {
                ::schemata_validator::Value: ::core::convert::From<#ty>
            });
        }

        entries.push(quote! {
            (#tag, ::schemata_validator::Value::from(::core::clone::Clone::clone(&self.#ident)))
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut ref_generics = generics.clone();
    ref_generics.params.insert(0, parse_quote!('__schema));
    let (ref_impl_generics, _, _) = ref_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::schemata_validator::Fields for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<(&'static str, ::schemata_validator::Value)> {
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics ::core::convert::From<#name #ty_generics>
            for ::schemata_validator::Value #where_clause
        {
            fn from(value: #name #ty_generics) -> Self {
                Self::Record(::schemata_validator::Fields::to_record(&value))
            }
        }

        impl #ref_impl_generics ::core::convert::From<&'__schema #name #ty_generics>
            for ::schemata_validator::Value #where_clause
        {
            fn from(value: &'__schema #name #ty_generics) -> Self {
                Self::Record(::schemata_validator::Fields::to_record(value))
            }
        }
    })
}

/// Validate that input is a struct with named fields.
fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => Ok(fields),
            syn::Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "Fields requires named fields.\n\
                 \n\
                 Tuple structs have no field names to tag.",
            )),
            syn::Fields::Unit => Err(syn::Error::new_spanned(
                input,
                "Fields cannot be applied to unit structs.\n\
                 \n\
                 Unit structs have no fields to enumerate.",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            "Fields can only be applied to structs.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Fields cannot be applied to unions.",
        )),
    }
}

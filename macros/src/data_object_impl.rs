//! DataObject derive macro implementation
//!
//! This module contains the implementation of the DataObject derive macro,
//! which generates a static schema and typed accessors for a newtype around
//! `data_object::Record`.

use std::collections::HashSet;

use darling::{FromDeriveInput, FromMeta};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput};

use crate::utils;

/// Receiver for the struct that derives `DataObject`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(data_object), supports(struct_newtype))]
pub struct DataObjectReceiver {
    /// The struct identifier
    pub ident: syn::Ident,
    /// Type name reported by the schema, defaults to the struct name
    #[darling(default)]
    pub name: Option<String>,
    /// `field(name = "...", ty = "...")` declarations
    #[darling(multiple, rename = "field")]
    pub fields: Vec<FieldAttr>,
    /// `list(name = "...", ty = "...")` declarations
    #[darling(multiple, rename = "list")]
    pub lists: Vec<ListAttr>,
    /// `init(field = "...", method = "...")` declarations
    #[darling(multiple, rename = "init")]
    pub inits: Vec<InitAttr>,
    /// `accessor = "..."` declarations
    #[darling(multiple, rename = "accessor")]
    pub accessors: Vec<String>,
}

/// A field holding one nested record
#[derive(Debug, FromMeta)]
pub struct FieldAttr {
    pub name: String,
    pub ty: syn::Path,
}

/// A field holding a list; primitive elements when `ty` is omitted
#[derive(Debug, FromMeta)]
pub struct ListAttr {
    pub name: String,
    #[darling(default)]
    pub ty: Option<syn::Path>,
}

/// An init hook bound to a field
#[derive(Debug, FromMeta)]
pub struct InitAttr {
    pub field: String,
    #[darling(default)]
    pub method: Option<syn::Ident>,
}

/// Process the DataObject derive macro
pub fn process_derive_data_object(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Expand a parsed `DeriveInput` into the generated items
pub fn expand(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let receiver = DataObjectReceiver::from_derive_input(input)?;
    let ident = &receiver.ident;
    let type_name = receiver
        .name
        .clone()
        .unwrap_or_else(|| ident.to_string());

    let schema = generate_schema(&receiver, &type_name)?;
    let accessors = generate_accessors(&receiver)?;

    Ok(quote! {
        impl ::data_object::DataObject for #ident {
            fn schema() -> &'static ::data_object::Schema {
                #schema
            }

            fn from_record(record: ::data_object::Record) -> Self {
                Self(record)
            }

            fn as_record(&self) -> &::data_object::Record {
                &self.0
            }

            fn as_record_mut(&mut self) -> &mut ::data_object::Record {
                &mut self.0
            }

            fn into_record(self) -> ::data_object::Record {
                self.0
            }
        }

        impl ::std::ops::Deref for #ident {
            type Target = ::data_object::Record;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for #ident {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::std::convert::From<#ident> for ::data_object::Record {
            fn from(object: #ident) -> Self {
                object.0
            }
        }

        impl ::std::convert::From<#ident> for ::data_object::Value {
            fn from(object: #ident) -> Self {
                ::data_object::Value::Object(object.0)
            }
        }

        #accessors
    })
}

/// Generate the body of `schema()`: hook glue functions and the static
fn generate_schema(
    receiver: &DataObjectReceiver,
    type_name: &str,
) -> darling::Result<proc_macro2::TokenStream> {
    let ident = &receiver.ident;

    let field_types = receiver.fields.iter().map(|field| {
        let key = &field.name;
        let ty = &field.ty;
        quote! {
            ::data_object::FieldType {
                field: #key,
                schema: <#ty as ::data_object::DataObject>::schema,
            }
        }
    });

    let list_fields = receiver.lists.iter().map(|list| {
        let key = &list.name;
        let element = match &list.ty {
            Some(ty) => quote! {
                ::data_object::ElementType::Object(<#ty as ::data_object::DataObject>::schema)
            },
            None => quote! { ::data_object::ElementType::Primitive },
        };
        quote! {
            ::data_object::ListField {
                field: #key,
                element: #element,
            }
        }
    });

    let mut hook_fns = Vec::with_capacity(receiver.inits.len());
    let mut init_hooks = Vec::with_capacity(receiver.inits.len());
    for (index, init) in receiver.inits.iter().enumerate() {
        let field = &init.field;
        let method = match &init.method {
            Some(method) => method.clone(),
            None => utils::init_method_ident(field, ident)?,
        };
        let hook_fn = format_ident!("__data_object_init_{}", index);

        // The hook receives the bare record; rewrap it so the method sees `Self`
        hook_fns.push(quote! {
            fn #hook_fn(record: &mut ::data_object::Record) {
                let mut object = <#ident as ::data_object::DataObject>::from_record(
                    ::std::mem::take(record),
                );
                #ident::#method(&mut object);
                *record = ::data_object::DataObject::into_record(object);
            }
        });
        init_hooks.push(quote! {
            ::data_object::InitHook {
                field: #field,
                run: #hook_fn,
            }
        });
    }

    Ok(quote! {
        #(#hook_fns)*

        static SCHEMA: ::data_object::Schema = ::data_object::Schema {
            name: #type_name,
            field_types: &[#(#field_types),*],
            list_fields: &[#(#list_fields),*],
            init_hooks: &[#(#init_hooks),*],
        };
        &SCHEMA
    })
}

/// Generate typed getters and `has_*` checks for every declared name
fn generate_accessors(receiver: &DataObjectReceiver) -> darling::Result<proc_macro2::TokenStream> {
    let ident = &receiver.ident;
    let mut seen = HashSet::new();
    let mut methods = Vec::new();

    let declared = receiver
        .fields
        .iter()
        .map(|field| (field.name.as_str(), AccessorKind::Record))
        .chain(
            receiver
                .lists
                .iter()
                .map(|list| (list.name.as_str(), AccessorKind::List)),
        )
        .chain(
            receiver
                .accessors
                .iter()
                .map(|name| (name.as_str(), AccessorKind::Value)),
        );

    for (name, kind) in declared {
        let getter = utils::method_ident(name, ident)?;
        if !seen.insert(getter.to_string()) {
            continue;
        }
        let has = utils::has_ident(name, ident)?;

        let getter_fn = match kind {
            AccessorKind::Record => quote! {
                pub fn #getter(&self) -> ::std::option::Option<&::data_object::Record> {
                    self.0.get(#name).and_then(::data_object::Value::as_record)
                }
            },
            AccessorKind::List => quote! {
                pub fn #getter(&self) -> ::std::option::Option<&[::data_object::Value]> {
                    self.0.get(#name).and_then(::data_object::Value::as_list)
                }
            },
            AccessorKind::Value => quote! {
                pub fn #getter(&self) -> ::std::option::Option<&::data_object::Value> {
                    self.0.get(#name)
                }
            },
        };

        methods.push(quote! {
            #getter_fn

            pub fn #has(&self) -> bool {
                self.0.has(#name)
            }
        });
    }

    if methods.is_empty() {
        return Ok(proc_macro2::TokenStream::new());
    }

    Ok(quote! {
        impl #ident {
            #(#methods)*
        }
    })
}

/// Shape of a generated getter
#[derive(Debug, Clone, Copy)]
enum AccessorKind {
    Record,
    List,
    Value,
}

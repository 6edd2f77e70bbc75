// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitInt, LitStr};

/// Record-level options from `#[structpack(...)]` on the struct.
#[derive(Default)]
struct RecordAttrs {
    size: Option<usize>,
    charset: Option<String>,
    order: Option<proc_macro2::TokenStream>,
    uninstantiable: bool,
}

/// Per-field options from `#[structpack(...)]` on a field.
#[derive(Default)]
struct FieldAttrs {
    size: Option<usize>,
    charset: Option<String>,
    order: Option<proc_macro2::TokenStream>,
    converter: Option<String>,
    resolver: Option<String>,
    skip: bool,
}

/// `#[derive(Struct)]`: generates a `structpack::Struct` impl.
///
/// Fields take part in declaration order; that order fixes the byte layout.
///
/// Struct attributes: `size = N`, `charset = "..."`, `order = "big" | "little"`,
/// `uninstantiable`. Without `uninstantiable` the type must implement `Default`.
///
/// Field attributes: `size = N`, `charset = "..."`, `order = ...`,
/// `converter = "id"`, `resolver = "id"`, `codec = "id"` (both), `skip`.
///
/// Example:
/// ```ignore
/// use structpack::Struct;
///
/// #[derive(Struct, Default)]
/// #[structpack(size = 32, order = "little")]
/// struct Packet {
///     kind: u8,
///     #[structpack(size = 3)]
///     length: u32,
///     #[structpack(size = 16, charset = "ISO-8859-1")]
///     name: String,
///     #[structpack(size = 4, codec = "raw-bytes")]
///     crc: Vec<u8>,
///     #[structpack(skip)]
///     scratch: Vec<u32>,
/// }
/// ```
#[proc_macro_derive(Struct, attributes(structpack))]
pub fn derive_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only named fields are supported",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(input, "Only structs are supported")),
    };

    let record = parse_record_attrs(&input.attrs)?;

    let mut decls = Vec::new();
    let mut getters = Vec::new();
    let mut setters = Vec::new();

    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let ty = &field.ty;
        let field_name = ident.to_string();
        let index = getters.len();

        let mut decl = quote! { ::structpack::FieldDecl::of::<#ty>(#field_name) };
        if let Some(size) = attrs.size {
            decl = quote! { #decl.size(#size) };
        }
        if let Some(order) = &attrs.order {
            decl = quote! { #decl.order(#order) };
        }
        if let Some(charset) = &attrs.charset {
            decl = quote! { #decl.charset(#charset) };
        }
        if let Some(converter) = &attrs.converter {
            decl = quote! { #decl.converter(#converter) };
        }
        if let Some(resolver) = &attrs.resolver {
            decl = quote! { #decl.resolver(#resolver) };
        }
        decls.push(quote! { .field(#decl) });

        getters.push(quote! {
            #index => ::core::result::Result::Ok(::structpack::FieldValue::to_value(&self.#ident)),
        });
        setters.push(quote! {
            #index => ::structpack::types::assign(&mut self.#ident, #field_name, value),
        });
    }

    let mut record_decl = quote! { ::structpack::StructDecl::new(#type_name) };
    if let Some(size) = record.size {
        record_decl = quote! { #record_decl.size(#size) };
    }
    if let Some(order) = &record.order {
        record_decl = quote! { #record_decl.order(#order) };
    }
    if let Some(charset) = &record.charset {
        record_decl = quote! { #record_decl.charset(#charset) };
    }

    let instantiate = if record.uninstantiable {
        quote! { ::core::option::Option::None }
    } else {
        quote! { ::core::option::Option::Some(<Self as ::core::default::Default>::default()) }
    };

    let no_field = quote! {
        ::core::result::Result::Err(::structpack::Error::Configuration {
            type_name: #type_name.to_string(),
            reason: ::std::format!("no field at index {}", index),
        })
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::structpack::Struct for #name #ty_generics #where_clause {
            fn declare() -> ::structpack::StructDecl {
                #record_decl
                #(#decls)*
            }

            fn instantiate() -> ::core::option::Option<Self> {
                #instantiate
            }

            fn field_value(&self, index: usize) -> ::structpack::Result<::structpack::Value> {
                match index {
                    #(#getters)*
                    _ => #no_field,
                }
            }

            #[allow(unused_variables)]
            fn set_field_value(
                &mut self,
                index: usize,
                value: ::structpack::Value,
            ) -> ::structpack::Result<()> {
                match index {
                    #(#setters)*
                    _ => #no_field,
                }
            }
        }
    })
}

fn parse_record_attrs(attrs: &[Attribute]) -> syn::Result<RecordAttrs> {
    let mut out = RecordAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("structpack")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("size") {
                out.size = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
            } else if meta.path.is_ident("charset") {
                out.charset = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("order") {
                out.order = Some(byte_order(&meta.value()?.parse::<LitStr>()?)?);
            } else if meta.path.is_ident("uninstantiable") {
                out.uninstantiable = true;
            } else {
                return Err(meta.error("unsupported structpack attribute"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("structpack")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("size") {
                let lit = meta.value()?.parse::<LitInt>()?;
                let size: usize = lit.base10_parse()?;
                if size == 0 {
                    return Err(syn::Error::new_spanned(lit, "size must be greater than zero"));
                }
                out.size = Some(size);
            } else if meta.path.is_ident("charset") {
                out.charset = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("order") {
                out.order = Some(byte_order(&meta.value()?.parse::<LitStr>()?)?);
            } else if meta.path.is_ident("converter") {
                out.converter = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("resolver") {
                out.resolver = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("codec") {
                let id = meta.value()?.parse::<LitStr>()?.value();
                out.converter = Some(id.clone());
                out.resolver = Some(id);
            } else if meta.path.is_ident("skip") {
                out.skip = true;
            } else {
                return Err(meta.error("unsupported structpack attribute"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Map an order literal to a `ByteOrder` path, rejecting unknown names at compile time.
fn byte_order(lit: &LitStr) -> syn::Result<proc_macro2::TokenStream> {
    match lit.value().to_ascii_lowercase().replace('_', "-").as_str() {
        "big" | "big-endian" | "be" | "network" => Ok(quote! { ::structpack::ByteOrder::Big }),
        "little" | "little-endian" | "le" => Ok(quote! { ::structpack::ByteOrder::Little }),
        other => Err(syn::Error::new_spanned(
            lit,
            format!("unknown byte order `{other}`, expected \"big\" or \"little\""),
        )),
    }
}

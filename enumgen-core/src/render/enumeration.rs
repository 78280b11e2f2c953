//! Per-enumeration template.
//!
//! For `Color { Red = "RED", LightBlue = "LIGHT_BLUE" }` this emits the
//! `Color` enum, `COLOR_VALUES`, the inherent accessors, `Display`,
//! `FromStr` with `ParseColorError`, `TryFrom<&str>`, `From<Color> for
//! &'static str` and, with `marshal`, serde impls over the display value.

use std::collections::HashSet;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{case, ident, RenderOptions, Template};
use crate::error::{EnumgenError, EnumgenResult};
use crate::model::Enumeration;

/// Template for one generated enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumTemplate;

impl Template for EnumTemplate {
    type Model = Enumeration;

    fn name(&self) -> &'static str {
        "enum"
    }

    fn expand(&self, e: &Enumeration, options: &RenderOptions) -> EnumgenResult<TokenStream> {
        let tpl = self.name();

        let ty = ident(tpl, &e.name)?;
        let value_ty: syn::Type = syn::parse_str(&e.value_type).map_err(|err| {
            EnumgenError::render(
                tpl,
                format!("value type `{}` of `{}`: {err}", e.value_type, e.name),
            )
        })?;

        let mut seen = HashSet::new();
        let mut variants = Vec::with_capacity(e.elements.len());
        let mut predicates = Vec::with_capacity(e.elements.len());
        for element in &e.elements {
            let variant = case::pascal(&element.field);
            if !seen.insert(variant.clone()) {
                return Err(EnumgenError::render(
                    tpl,
                    format!("`{}` maps two fields to variant `{variant}`", e.name),
                ));
            }
            variants.push(ident(tpl, &variant)?);
            predicates.push(ident(tpl, &format!("is_{}", case::snake(&element.field)))?);
        }

        let values: Vec<&str> = e.elements.iter().map(|el| el.value.as_str()).collect();
        let fields: Vec<&str> = e.elements.iter().map(|el| el.field.as_str()).collect();
        let descriptions: Vec<&str> = e.elements.iter().map(|el| el.description.as_str()).collect();
        let variant_docs: Vec<Option<TokenStream>> = e
            .elements
            .iter()
            .map(|el| {
                (!el.description.is_empty()).then(|| {
                    let doc = format!(" {}", el.description);
                    quote!(#[doc = #doc])
                })
            })
            .collect();

        let count = Literal::usize_unsuffixed(e.elements.len());
        let values_const = ident(tpl, &format!("{}_VALUES", case::to_upper(&case::snake(&e.name))))?;
        let error_ty = ident(tpl, &format!("Parse{}Error", e.name))?;

        let type_doc = format!(" Generated from `{}`.", e.original_name);
        let values_doc = format!(" Every [`{}`] in declaration order.", e.name);
        let error_doc = format!(" Error returned when a string is not a [`{}`] display value.", e.name);
        let error_fmt = format!("invalid {} value: {{:?}}", case::lc_first(&e.name));

        let from_str_body = if options.lower {
            let lowered: Vec<String> = values.iter().map(|v| case::to_lower(v)).collect();
            quote! {
                match s.to_lowercase().as_str() {
                    #(#lowered => ::core::result::Result::Ok(Self::#variants),)*
                    _ => ::core::result::Result::Err(#error_ty(s.to_owned())),
                }
            }
        } else {
            quote! {
                match s {
                    #(#values => ::core::result::Result::Ok(Self::#variants),)*
                    _ => ::core::result::Result::Err(#error_ty(s.to_owned())),
                }
            }
        };

        let marshal = options.marshal.then(|| {
            quote! {
                impl ::serde::Serialize for #ty {
                    fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                    where
                        S: ::serde::Serializer,
                    {
                        serializer.serialize_str(self.as_str())
                    }
                }

                impl<'de> ::serde::Deserialize<'de> for #ty {
                    fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                    where
                        D: ::serde::Deserializer<'de>,
                    {
                        let s = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                        s.parse().map_err(::serde::de::Error::custom)
                    }
                }
            }
        });

        Ok(quote! {
            #[doc = #type_doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum #ty {
                #(#variant_docs #variants,)*
            }

            #[doc = #values_doc]
            pub const #values_const: [#ty; #count] = [#(#ty::#variants),*];

            impl #ty {
                /// All elements in declaration order.
                pub const fn values() -> &'static [#ty] {
                    &#values_const
                }

                /// Display value of the element.
                pub const fn as_str(&self) -> &'static str {
                    match self {
                        #(Self::#variants => #values,)*
                    }
                }

                /// Name of the field the element was declared with.
                pub const fn name(&self) -> &'static str {
                    match self {
                        #(Self::#variants => #fields,)*
                    }
                }

                /// Description of the element, empty when none was given.
                pub const fn description(&self) -> &'static str {
                    match self {
                        #(Self::#variants => #descriptions,)*
                    }
                }

                /// Parses the display value into the element value type.
                pub fn parse_value(
                    &self,
                ) -> ::core::result::Result<#value_ty, <#value_ty as ::core::str::FromStr>::Err> {
                    self.as_str().parse::<#value_ty>()
                }

                #(
                    pub const fn #predicates(&self) -> bool {
                        matches!(self, Self::#variants)
                    }
                )*
            }

            impl ::core::fmt::Display for #ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            #[doc = #error_doc]
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct #error_ty(pub ::std::string::String);

            impl ::core::fmt::Display for #error_ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    write!(f, #error_fmt, self.0)
                }
            }

            impl ::std::error::Error for #error_ty {}

            impl ::core::str::FromStr for #ty {
                type Err = #error_ty;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    #from_str_body
                }
            }

            impl ::core::convert::TryFrom<&str> for #ty {
                type Error = #error_ty;

                fn try_from(s: &str) -> ::core::result::Result<Self, Self::Error> {
                    s.parse()
                }
            }

            impl ::core::convert::From<#ty> for &'static str {
                fn from(value: #ty) -> Self {
                    value.as_str()
                }
            }

            #marshal
        })
    }
}

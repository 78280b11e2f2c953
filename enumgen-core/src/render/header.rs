//! File header: generated-code banner and crate-level lint allowances.

use proc_macro2::TokenStream;
use quote::quote;

use super::{RenderOptions, Template};
use crate::error::EnumgenResult;

/// Name printed in the banner.
pub const GENERATOR: &str = "enumgen";

/// Header model: the declaration files the output was generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub sources: Vec<String>,
}

impl Header {
    pub fn new(sources: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

/// Template for the top of the generated file.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTemplate;

impl Template for HeaderTemplate {
    type Model = Header;

    fn name(&self) -> &'static str {
        "header"
    }

    fn expand(&self, header: &Header, _: &RenderOptions) -> EnumgenResult<TokenStream> {
        let banner = if header.sources.is_empty() {
            format!(" Code generated by {GENERATOR}. DO NOT EDIT.")
        } else {
            format!(
                " Code generated by {GENERATOR} from {}. DO NOT EDIT.",
                header.sources.join(", ")
            )
        };

        Ok(quote! {
            #![doc = #banner]
            #![allow(dead_code, clippy::all)]
        })
    }
}

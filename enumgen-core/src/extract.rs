//! Enumeration extraction from parsed declaration files.
//!
//! Only top-level structs with named fields are inspected:
//!
//! ```text
//! struct ColorEnum {
//!     #[tag = r#"enum:"RED""#]
//!     Red: String,
//!     #[tag = r#"enum:"LIGHT_BLUE,Sky colored""#]
//!     LightBlue: String,
//! }
//! ```
//!
//! yields `Color` with elements `RED` and `LIGHT_BLUE`.

use std::collections::HashMap;
use std::path::Path;

use quote::ToTokens;
use serde::Deserialize;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Field, Fields, File, Item, ItemStruct, Lit, LitStr, Meta};
use tracing::debug;

use crate::enum_tag::EnumTag;
use crate::error::{EnumgenError, EnumgenResult};
use crate::model::{EnumElement, Enumeration};
use crate::render::case;

/// Default substring marking a struct as an enumeration declaration.
pub const DEFAULT_MARKER: &str = "Enum";
/// Default annotation key holding the element value.
pub const DEFAULT_KEY: &str = "enum";
/// Default field attribute carrying the annotation text.
pub const DEFAULT_TAG_ATTRIBUTE: &str = "tag";
/// Default struct attribute used by [`Detection::Attribute`].
pub const DEFAULT_OPT_IN_ATTRIBUTE: &str = "enumgen";

/// How enumeration declarations are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detection {
    /// Struct name contains the marker substring
    #[default]
    Name,
    /// Struct carries the opt-in attribute
    Attribute,
}

/// Knobs for the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub detection: Detection,
    /// Substring removed from the declared name; also the name-mode marker
    pub marker: String,
    /// Annotation key holding `VALUE[,DESCRIPTION]`
    pub key: String,
    /// Field attribute carrying the annotation text
    pub tag_attribute: String,
    /// Struct attribute used for attribute-mode detection
    pub attribute: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            detection: Detection::default(),
            marker: DEFAULT_MARKER.to_string(),
            key: DEFAULT_KEY.to_string(),
            tag_attribute: DEFAULT_TAG_ATTRIBUTE.to_string(),
            attribute: DEFAULT_OPT_IN_ATTRIBUTE.to_string(),
        }
    }
}

impl ExtractOptions {
    fn is_detected(&self, item: &ItemStruct) -> bool {
        match self.detection {
            Detection::Name => item.ident.to_string().contains(&self.marker),
            Detection::Attribute => item
                .attrs
                .iter()
                .any(|a| a.path().is_ident(self.attribute.as_str())),
        }
    }

    fn short_name(&self, original: &str) -> String {
        if self.marker.is_empty() {
            original.to_string()
        } else {
            original.replace(&self.marker, "")
        }
    }
}

/// Parses `content` and extracts its enumerations.
pub fn extract_from_source(
    path: &Path,
    content: &str,
    opts: &ExtractOptions,
) -> EnumgenResult<Vec<Enumeration>> {
    let ast = syn::parse_file(content).map_err(|e| EnumgenError::from_syn(path, &e))?;
    extract_enums(path, &ast, opts)
}

/// Extracts all enumerations declared at the top level of `ast`, in order.
pub fn extract_enums(
    path: &Path,
    ast: &File,
    opts: &ExtractOptions,
) -> EnumgenResult<Vec<Enumeration>> {
    let mut enums = Vec::new();

    for item in &ast.items {
        let Item::Struct(item) = item else {
            continue;
        };
        if !opts.is_detected(item) {
            continue;
        }
        let Fields::Named(named) = &item.fields else {
            debug!(name = %item.ident, "skipping struct without named fields");
            continue;
        };

        let original = item.ident.unraw().to_string();
        let elements = extract_elements(path, named.named.iter(), opts)?;
        if elements.is_empty() {
            debug!(name = %original, "skipping struct without tagged fields");
            continue;
        }

        let name = opts.short_name(&original);
        if name.is_empty() {
            return Err(EnumgenError::declaration(
                path,
                &original,
                format!("removing `{}` leaves an empty enumeration name", opts.marker),
            ));
        }

        if let Some(first) = elements.first() {
            for other in elements.iter().skip(1) {
                if other.value_type != first.value_type {
                    debug!(
                        name = %original,
                        field = %other.field,
                        expected = %first.value_type,
                        found = %other.value_type,
                        "element value type differs from the first element"
                    );
                }
            }
        }

        check_identifiers(path, &original, &name, &elements)?;

        debug!(name = %name, elements = elements.len(), "extracted enumeration");
        if let Some(e) = Enumeration::new(original, name, elements, path) {
            if let Some((first, second)) = e.duplicate_value(false) {
                return Err(EnumgenError::declaration(
                    path,
                    &e.original_name,
                    format!(
                        "fields `{}` and `{}` share the display value {:?}",
                        first.field, second.field, second.value
                    ),
                ));
            }
            enums.push(e);
        }
    }

    Ok(enums)
}

fn extract_elements<'a>(
    path: &Path,
    fields: impl Iterator<Item = &'a Field>,
    opts: &ExtractOptions,
) -> EnumgenResult<Vec<EnumElement>> {
    let prefix = format!("{}:", opts.key);
    let mut elements = Vec::new();

    for field in fields {
        let Some(attr) = field
            .attrs
            .iter()
            .find(|a| a.path().is_ident(opts.tag_attribute.as_str()))
        else {
            continue;
        };
        let Some(annotation) = annotation_text(attr) else {
            debug!(
                field = ?field.ident.as_ref().map(|i| i.unraw().to_string()),
                "skipping non-string tag"
            );
            continue;
        };
        if !annotation.starts_with(&prefix) {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };

        let field_name = ident.unraw().to_string();
        let line = ident.span().start().line;
        let tag = EnumTag::parse(path, &annotation, &opts.key, &field_name, line)?;

        elements.push(EnumElement {
            value: tag.value,
            field: field_name,
            description: tag.description,
            value_type: field.ty.to_token_stream().to_string(),
        });
    }

    Ok(elements)
}

/// Reads the annotation string out of `#[tag = "..."]` or `#[tag("...")]`.
///
/// Any other shape carries no annotation string.
fn annotation_text(attr: &Attribute) -> Option<String> {
    match &attr.meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => Some(s.value()),
            _ => None,
        },
        Meta::List(_) => attr.parse_args::<LitStr>().ok().map(|s| s.value()),
        Meta::Path(_) => None,
    }
}

/// Rejects declarations whose generated names would not be valid Rust.
fn check_identifiers(
    path: &Path,
    original: &str,
    name: &str,
    elements: &[EnumElement],
) -> EnumgenResult<()> {
    if !is_ident(name) {
        return Err(EnumgenError::declaration(
            path,
            original,
            format!("`{name}` is not a valid type name"),
        ));
    }

    let mut variants: HashMap<String, &str> = HashMap::new();
    for element in elements {
        let variant = case::pascal(&element.field);
        let predicate = format!("is_{}", case::snake(&element.field));
        if !is_ident(&variant) || !is_ident(&predicate) {
            return Err(EnumgenError::declaration(
                path,
                original,
                format!("field `{}` does not map to a valid variant name", element.field),
            ));
        }
        if let Some(previous) = variants.insert(variant.clone(), &element.field) {
            return Err(EnumgenError::declaration(
                path,
                original,
                format!(
                    "fields `{previous}` and `{}` both map to variant `{variant}`",
                    element.field
                ),
            ));
        }
    }
    Ok(())
}

fn is_ident(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}

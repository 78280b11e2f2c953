//! Interpretation of the enum key's value: `VALUE[,DESCRIPTION]`.

use std::path::Path;

use crate::error::{EnumgenError, EnumgenResult};
use crate::tag;

/// Display value that stands for "use the field's own name".
pub const FIELD_NAME_SENTINEL: &str = "-";

/// Decoded enum annotation of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTag {
    /// Display value exposed by the generated element
    pub value: String,
    /// Free-form description, empty when absent
    pub description: String,
}

impl EnumTag {
    /// Splits a decoded value into display value and description.
    ///
    /// Only the first two comma-separated segments are used. A display
    /// value of `-` resolves to `field`.
    pub fn interpret(decoded: &str, field: &str) -> Self {
        let mut segments = decoded.split(',');
        let value = segments.next().unwrap_or_default();
        let description = segments.next().unwrap_or_default();

        let value = if value == FIELD_NAME_SENTINEL {
            field.to_string()
        } else {
            value.to_string()
        };

        Self {
            value,
            description: description.to_string(),
        }
    }

    /// Looks up `key` in a raw annotation and interprets its value.
    ///
    /// A missing or undecodable key is fatal: the generator cannot guess the
    /// intended element.
    pub fn parse(
        path: &Path,
        annotation: &str,
        key: &str,
        field: &str,
        line: usize,
    ) -> EnumgenResult<Self> {
        match tag::lookup(annotation, key) {
            Some(decoded) => Ok(Self::interpret(&decoded, field)),
            None => Err(EnumgenError::tag(
                path,
                field,
                line,
                format!("{key} struct tag did not contain a value: {annotation}"),
            )),
        }
    }
}

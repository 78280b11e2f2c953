//! In-memory model handed from the extractor to the renderer.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// One enumeration derived from an annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// Declared struct name, e.g. `ColorEnum`
    pub original_name: String,
    /// Generated type name, the declared name without the marker, e.g. `Color`
    pub name: String,
    /// Value type shared by the elements, taken from the first element
    pub value_type: String,
    /// Elements in declaration order
    pub elements: Vec<EnumElement>,
    /// File the declaration was read from
    pub source: PathBuf,
}

/// One member of an [`Enumeration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumElement {
    /// Display value
    pub value: String,
    /// Identifier of the source field
    pub field: String,
    /// Description, empty when the annotation has none
    pub description: String,
    /// Declared type of the source field
    pub value_type: String,
}

impl Enumeration {
    /// Builds an enumeration; the value type comes from the first element.
    ///
    /// Returns `None` when `elements` is empty.
    pub fn new(
        original_name: impl Into<String>,
        name: impl Into<String>,
        elements: Vec<EnumElement>,
        source: impl Into<PathBuf>,
    ) -> Option<Self> {
        let value_type = elements.first()?.value_type.clone();
        Some(Self {
            original_name: original_name.into(),
            name: name.into(),
            value_type,
            elements,
            source: source.into(),
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for extracted enumerations.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// First pair of elements sharing a display value, compared
    /// case-insensitively when `fold_case` is set.
    pub fn duplicate_value(&self, fold_case: bool) -> Option<(&EnumElement, &EnumElement)> {
        let key = |e: &EnumElement| {
            if fold_case {
                e.value.to_lowercase()
            } else {
                e.value.clone()
            }
        };
        let mut seen: HashMap<String, &EnumElement> = HashMap::new();
        for element in &self.elements {
            if let Some(first) = seen.insert(key(element), element) {
                return Some((first, element));
            }
        }
        None
    }
}

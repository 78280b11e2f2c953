//! Template rendering.
//!
//! Templates are fixed at build time and expanded with `quote`. Each
//! expansion becomes one fragment; the [`Renderer`] keeps fragments in the
//! order they were rendered and joins them once in [`Renderer::finish`].
//!
//! ```rust,ignore
//! let mut renderer = Renderer::new(RenderOptions::default());
//! renderer.render(&HeaderTemplate, &Header::new(["colors.rs"]))?;
//! for e in &enums {
//!     renderer.render(&EnumTemplate, e)?;
//! }
//! let source = renderer.finish();
//! ```

pub mod case;
pub mod enumeration;
pub mod header;

pub use enumeration::EnumTemplate;
pub use header::{Header, HeaderTemplate};

use proc_macro2::{Ident, TokenStream};

use crate::error::{EnumgenError, EnumgenResult};

/// Switches for optional generated helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit serde `Serialize`/`Deserialize` impls
    pub marshal: bool,
    /// Parse display values case-insensitively
    pub lower: bool,
}

/// A fixed template expanded against a model.
pub trait Template {
    type Model;

    /// Template name used in error reports.
    fn name(&self) -> &'static str;

    /// Expands the template for `model`.
    fn expand(&self, model: &Self::Model, options: &RenderOptions) -> EnumgenResult<TokenStream>;
}

/// Ordered collection of rendered fragments.
#[derive(Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
    fragments: Vec<String>,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            fragments: Vec::new(),
        }
    }

    /// Expands `template` for `model` and appends the result.
    pub fn render<T: Template>(&mut self, template: &T, model: &T::Model) -> EnumgenResult<()> {
        let tokens = template.expand(model, &self.options)?;
        self.fragments.push(tokens.to_string());
        Ok(())
    }

    /// Fragments rendered so far, in order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Joins all fragments into the output text.
    pub fn finish(self) -> String {
        self.fragments.join("\n")
    }
}

/// Builds an identifier, reporting a render error instead of panicking.
pub(crate) fn ident(template: &'static str, name: &str) -> EnumgenResult<Ident> {
    syn::parse_str::<Ident>(name)
        .map_err(|e| EnumgenError::render(template, format!("`{name}` is not an identifier: {e}")))
}

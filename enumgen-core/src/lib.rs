//! enumgen-core: enumeration code generation from annotated declarations.
//!
//! Declaration files are Rust sources that are parsed, never compiled. Each
//! struct recognized as an enumeration declaration contributes one generated
//! enum; each tagged field contributes one element:
//!
//! ```rust,ignore
//! struct SushiEnum {
//!     #[tag = r#"enum:"MAKI,Rice and filling wrapped in seaweed""#]
//!     Maki: String,
//!     #[tag = r#"enum:"TEMAKI,Hand rolled into a cone shape""#]
//!     Temaki: String,
//! }
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use enumgen_core::prelude::*;
//!
//! let report = Enumgen::new()
//!     .file("decls/")
//!     .marshal(true)
//!     .run()?;
//! ```
//!
//! # Module Organization
//!
//! - [`tag`]: generic `key:"value"` annotation scanner
//! - [`enum_tag`]: display value / description split
//! - [`extract`]: enumeration detection and model building
//! - [`render`]: fixed templates and the fragment renderer
//! - [`sink`]: pretty-printing and output writing
//! - [`driver`]: fluent builder tying the pipeline together
//! - [`error`]: typed error handling
//!
//! # Cargo Features
//!
//! - `format` (default): pretty-print output with prettyplease

pub mod config;
pub mod driver;
pub mod enum_tag;
pub mod error;
pub mod extract;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod render;
pub mod scan;
pub mod sink;
pub mod tag;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{EnumgenError, EnumgenResult, IoResultExt};

// Builder API
pub use driver::{Enumgen, Generation, GenerationReport};

// Configuration
pub use config::{load_config, load_config_file, EnumgenConfig, CONFIG_FILE};

// Annotation parsing
pub use enum_tag::EnumTag;
pub use tag::{lookup, pairs, unquote, Pairs};

// Extraction
pub use extract::{extract_enums, extract_from_source, Detection, ExtractOptions};
pub use model::{EnumElement, Enumeration};

// Rendering
pub use render::{EnumTemplate, Header, HeaderTemplate, RenderOptions, Renderer, Template};

// Output
pub use sink::{format_source, output_path, write_output, Formatted, DEFAULT_OUTPUT_NAME};

// Logging
pub use logging::{init_pretty_logging, init_structured_logging};

// File scanning
pub use scan::{gather_rs_files, resolve_inputs};

#[cfg(test)]
mod tests;

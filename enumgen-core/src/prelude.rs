//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use enumgen_core::prelude::*;
//! ```

pub use crate::config::{load_config, EnumgenConfig};
pub use crate::driver::{Enumgen, Generation, GenerationReport};
pub use crate::error::{EnumgenError, EnumgenResult};
pub use crate::extract::Detection;
pub use crate::model::{EnumElement, Enumeration};

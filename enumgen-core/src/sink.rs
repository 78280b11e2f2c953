//! Output formatting and writing.
//!
//! Formatting failures never block output: the raw text is kept so the user
//! can compile it and read the error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{EnumgenResult, IoResultExt};

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "enumgen.rs";

/// Generated source, possibly pretty-printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Whether `text` went through the pretty-printer
    pub formatted: bool,
}

/// Pretty-prints generated source, falling back to `raw` on failure.
#[cfg(feature = "format")]
pub fn format_source(raw: &str) -> Formatted {
    match syn::parse_file(raw) {
        Ok(file) => Formatted {
            text: prettyplease::unparse(&file),
            formatted: true,
        },
        Err(e) => {
            tracing::warn!(error = %e, "internal error: invalid Rust generated");
            tracing::warn!("compile the generated file to analyze the error");
            Formatted {
                text: raw.to_string(),
                formatted: false,
            }
        }
    }
}

/// Without the `format` feature the raw text is returned unchanged.
#[cfg(not(feature = "format"))]
pub fn format_source(raw: &str) -> Formatted {
    Formatted {
        text: raw.to_string(),
        formatted: false,
    }
}

/// Resolves where output goes.
///
/// An explicit path naming an existing directory gets the default file name
/// appended. Without an explicit path the output lands next to the first
/// input: inside it for a directory, beside it for a file.
pub fn output_path(explicit: Option<&Path>, first_input: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        if path.is_dir() {
            return path.join(DEFAULT_OUTPUT_NAME);
        }
        return path.to_path_buf();
    }

    let dir = match first_input {
        Some(p) if p.is_dir() => p.to_path_buf(),
        Some(p) => p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
        None => PathBuf::new(),
    };
    dir.join(DEFAULT_OUTPUT_NAME)
}

/// Writes `text` to `path`, creating parent directories.
pub fn write_output(path: &Path, text: &str) -> EnumgenResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(path, text).with_path(path)?;
    info!(path = %path.display(), bytes = text.len(), "wrote generated source");
    Ok(())
}

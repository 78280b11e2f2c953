//! Typed error handling for enumgen.
//!
//! Errors fall into two classes. User-input errors (`Parse`, `Tag`,
//! `Declaration`, `Config`, `InvalidArgument`, `Io`) mean the declarations or
//! the invocation are wrong. `Render` is an internal error: the fixed
//! templates could not be expanded for a model, which is a generator defect.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enumgen operations.
#[derive(Error, Debug)]
pub enum EnumgenError {
    /// I/O error when reading/writing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Syntax error when parsing a declaration file
    #[error("Parse error in {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
        /// Line number (1-indexed) if available
        line: Option<usize>,
        /// Column number (1-indexed) if available
        column: Option<usize>,
    },

    /// A field annotation that starts with the enum key but cannot be decoded
    #[error("Tag error in {path} at field `{field}` (line {line}): {message}")]
    Tag {
        path: PathBuf,
        field: String,
        line: usize,
        message: String,
    },

    /// A detected declaration that cannot become an enumeration
    #[error("Declaration error in {path} at `{name}`: {message}")]
    Declaration {
        path: PathBuf,
        name: String,
        message: String,
    },

    /// Template expansion failed for a model
    #[error("Internal error: template `{template}` failed: {message}")]
    Render {
        template: &'static str,
        message: String,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl EnumgenError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error without location.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Create a parse error with line/column info.
    pub fn parse_at(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create a parse error from a `syn` error, keeping its span location.
    pub fn from_syn(path: impl Into<PathBuf>, err: &syn::Error) -> Self {
        let start = err.span().start();
        // proc-macro2 columns are 0-indexed
        Self::parse_at(path, err.to_string(), start.line, start.column + 1)
    }

    /// Create a tag error for a field.
    pub fn tag(
        path: impl Into<PathBuf>,
        field: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Tag {
            path: path.into(),
            field: field.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a declaration error.
    pub fn declaration(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Declaration {
            path: path.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a render error for the named template.
    pub fn render(template: &'static str, message: impl Into<String>) -> Self {
        Self::Render {
            template,
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error points at a defect in the generator rather than
    /// at its input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Render { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Tag { path, .. } => Some(path),
            Self::Declaration { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for enumgen results.
pub type EnumgenResult<T> = Result<T, EnumgenError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> EnumgenResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> EnumgenResult<T> {
        self.map_err(|e| EnumgenError::io(path, e))
    }
}

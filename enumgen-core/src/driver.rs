//! Builder API driving a generation run.
//!
//! ```rust,ignore
//! use enumgen_core::prelude::*;
//!
//! let report = Enumgen::new()
//!     .file("src/decls/colors.rs")
//!     .output("src/colors_gen.rs")
//!     .marshal(true)
//!     .run()?;
//!
//! println!("{} enumerations -> {}", report.enum_count, report.output.display());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::EnumgenConfig;
use crate::error::{EnumgenError, EnumgenResult, IoResultExt};
use crate::extract::{extract_from_source, Detection, ExtractOptions};
use crate::model::Enumeration;
use crate::render::{EnumTemplate, Header, HeaderTemplate, RenderOptions, Renderer};
use crate::scan::resolve_inputs;
use crate::sink::{self, Formatted};

/// Builder for configuring a generation run.
#[derive(Debug, Clone)]
pub struct Enumgen {
    /// Declaration files or directories, in order
    inputs: Vec<PathBuf>,

    /// Explicit output path
    output: Option<PathBuf>,

    /// Detection and annotation settings
    extract: ExtractOptions,

    /// Optional generated helpers
    render: RenderOptions,

    /// Pretty-print the output
    format: bool,
}

impl Default for Enumgen {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything produced by [`Enumgen::generate`], before writing.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Declaration files read, in order
    pub files: Vec<PathBuf>,
    /// Extracted models, in encounter order
    pub enumerations: Vec<Enumeration>,
    /// Generated source text
    pub source: String,
    /// Whether `source` was pretty-printed
    pub formatted: bool,
    /// Where the source is meant to be written
    pub output: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub files_scanned: usize,
    pub enum_count: usize,
    pub bytes_written: usize,
    pub formatted: bool,
}

impl Enumgen {
    /// Create a builder with no inputs and default settings.
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            extract: ExtractOptions::default(),
            render: RenderOptions::default(),
            format: true,
        }
    }

    /// Add a declaration file or directory.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Add several declaration files or directories.
    pub fn files(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.inputs.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Set the output file (or directory).
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Emit serde impls for every enumeration.
    pub fn marshal(mut self, enabled: bool) -> Self {
        self.render.marshal = enabled;
        self
    }

    /// Parse display values case-insensitively.
    pub fn lower(mut self, enabled: bool) -> Self {
        self.render.lower = enabled;
        self
    }

    /// Choose how declarations are recognized.
    pub fn detection(mut self, detection: Detection) -> Self {
        self.extract.detection = detection;
        self
    }

    /// Set the name marker substring.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.extract.marker = marker.into();
        self
    }

    /// Set the annotation key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.extract.key = key.into();
        self
    }

    /// Set the field attribute carrying annotations.
    pub fn tag_attribute(mut self, name: impl Into<String>) -> Self {
        self.extract.tag_attribute = name.into();
        self
    }

    /// Set the struct attribute used by attribute detection.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.extract.attribute = name.into();
        self
    }

    /// Enable or disable pretty-printing.
    pub fn format(mut self, enabled: bool) -> Self {
        self.format = enabled;
        self
    }

    /// Apply every setting present in `config`.
    pub fn with_config(mut self, config: &EnumgenConfig) -> Self {
        if let Some(output) = &config.output {
            self.output = Some(output.clone());
        }
        if let Some(marshal) = config.marshal {
            self.render.marshal = marshal;
        }
        if let Some(lower) = config.lower {
            self.render.lower = lower;
        }
        if let Some(detection) = config.detection {
            self.extract.detection = detection;
        }
        if let Some(marker) = &config.marker {
            self.extract.marker = marker.clone();
        }
        if let Some(key) = &config.key {
            self.extract.key = key.clone();
        }
        if let Some(tag_attribute) = &config.tag_attribute {
            self.extract.tag_attribute = tag_attribute.clone();
        }
        if let Some(attribute) = &config.attribute {
            self.extract.attribute = attribute.clone();
        }
        if let Some(format) = config.format {
            self.format = format;
        }
        self
    }

    /// Where generated source will be written.
    pub fn output_path(&self) -> PathBuf {
        sink::output_path(self.output.as_deref(), self.inputs.first().map(PathBuf::as_path))
    }

    /// Read every declaration file and extract its enumerations.
    pub fn extract(&self) -> EnumgenResult<(Vec<PathBuf>, Vec<Enumeration>)> {
        if self.inputs.is_empty() {
            return Err(EnumgenError::invalid_argument("no input files given"));
        }

        let output = self.output_path();
        let files = resolve_inputs(&self.inputs, &[output])?;

        let mut enums = Vec::new();
        for file in &files {
            let content = fs::read_to_string(file).with_path(file)?;
            let found = extract_from_source(file, &content, &self.extract)?;
            info!(file = %file.display(), enums = found.len(), "scanned declaration file");
            enums.extend(found);
        }

        Ok((files, enums))
    }

    /// Run extraction and rendering without writing anything.
    pub fn generate(&self) -> EnumgenResult<Generation> {
        let (files, enumerations) = self.extract()?;
        if enumerations.is_empty() {
            warn!(files = files.len(), "no enumerations found");
        }
        if self.render.lower {
            for e in &enumerations {
                if let Some((first, second)) = e.duplicate_value(true) {
                    return Err(EnumgenError::declaration(
                        &e.source,
                        &e.original_name,
                        format!(
                            "fields `{}` and `{}` have display values {:?} and {:?} that collide when lowercased",
                            first.field, second.field, first.value, second.value
                        ),
                    ));
                }
            }
        }

        let mut renderer = Renderer::new(self.render);
        renderer.render(&HeaderTemplate, &Header::new(files.iter().map(|f| display_name(f))))?;
        for e in &enumerations {
            debug!(name = %e.name, source = %e.source.display(), "rendering enumeration");
            renderer.render(&EnumTemplate, e)?;
        }
        let raw = renderer.finish();

        let Formatted { text, formatted } = if self.format {
            sink::format_source(&raw)
        } else {
            Formatted {
                text: raw,
                formatted: false,
            }
        };

        Ok(Generation {
            files,
            enumerations,
            source: text,
            formatted,
            output: self.output_path(),
        })
    }

    /// Generate and write the output file.
    pub fn run(&self) -> EnumgenResult<GenerationReport> {
        let generation = self.generate()?;
        sink::write_output(&generation.output, &generation.source)?;

        let report = GenerationReport {
            output: generation.output,
            files_scanned: generation.files.len(),
            enum_count: generation.enumerations.len(),
            bytes_written: generation.source.len(),
            formatted: generation.formatted,
        };
        info!(
            output = %report.output.display(),
            enums = report.enum_count,
            files = report.files_scanned,
            "generation complete"
        );
        Ok(report)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

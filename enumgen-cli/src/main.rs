//! enumgen CLI - generates Rust enumerations from annotated declarations.
//!
//! Exit codes:
//! - 0: success
//! - 1: bad input (declarations, config, arguments)
//! - 2: internal error in the generator

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use enumgen_core::{
    init_pretty_logging, init_structured_logging, load_config, load_config_file, Detection,
    Enumgen, EnumgenConfig, EnumgenError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate Rust enumerations from annotated declarations")]
pub struct Cli {
    /// Declaration files or directories to scan
    paths: Vec<PathBuf>,

    /// Declaration file to scan; repeat for more files
    #[arg(long = "file", short = 'f', value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file; defaults to enumgen.rs next to the first input
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Emit serde Serialize/Deserialize impls
    #[arg(long)]
    marshal: bool,

    /// Parse display values case-insensitively
    #[arg(long)]
    lower: bool,

    /// Recognize declarations by the #[enumgen] attribute instead of the name marker
    #[arg(long)]
    attribute: bool,

    /// Name marker substring (default "Enum")
    #[arg(long)]
    marker: Option<String>,

    /// Annotation key (default "enum")
    #[arg(long)]
    key: Option<String>,

    /// Configuration file (default ./enumgen.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the raw generated text without pretty-printing
    #[arg(long)]
    no_format: bool,

    /// Print generated source to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the extracted model as JSON and exit
    #[arg(long)]
    json: bool,

    /// Log output format on stderr
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

impl Cli {
    fn inputs(&self) -> Vec<PathBuf> {
        self.paths.iter().chain(self.files.iter()).cloned().collect()
    }

    fn config(&self) -> Result<Option<EnumgenConfig>> {
        match &self.config {
            Some(path) => Ok(Some(load_config_file(path)?)),
            None => Ok(load_config(Path::new("."))?),
        }
    }

    /// Builder from config file first, then flags on top.
    fn builder(&self, config: Option<&EnumgenConfig>) -> Enumgen {
        let mut builder = Enumgen::new().files(self.inputs());
        if let Some(config) = config {
            builder = builder.with_config(config);
        }
        if let Some(output) = &self.output {
            builder = builder.output(output);
        }
        if self.marshal {
            builder = builder.marshal(true);
        }
        if self.lower {
            builder = builder.lower(true);
        }
        if self.attribute {
            builder = builder.detection(Detection::Attribute);
        }
        if let Some(marker) = &self.marker {
            builder = builder.marker(marker);
        }
        if let Some(key) = &self.key {
            builder = builder.key(key);
        }
        if self.no_format {
            builder = builder.format(false);
        }
        builder
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config().context("Failed to load configuration")?;
    let builder = cli.builder(config.as_ref());

    if cli.json {
        let (_, enums) = builder.extract()?;
        println!("{}", serde_json::to_string_pretty(&enums)?);
        return Ok(());
    }

    if cli.stdout {
        let generation = builder.generate()?;
        print!("{}", generation.source);
        return Ok(());
    }

    let report = builder.run()?;
    eprintln!(
        "Generated {} enumeration(s) from {} file(s) into {}",
        report.enum_count,
        report.files_scanned,
        report.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] enumgen internal error: {}", info);
        eprintln!("[PANIC] Please report it along with the declaration file that triggered it.");
    }));

    let cli = Cli::parse();
    match cli.log_format {
        LogFormat::Json => init_structured_logging(),
        LogFormat::Pretty => init_pretty_logging(),
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let internal = err
                .downcast_ref::<EnumgenError>()
                .is_some_and(EnumgenError::is_internal);
            if internal {
                tracing::error!(error = %err, "internal error");
                eprintln!("internal error: {err:#}");
                ExitCode::from(2)
            } else {
                eprintln!("error: {err:#}");
                ExitCode::from(1)
            }
        }
    }
}

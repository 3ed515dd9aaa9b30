//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lr-generator: precomputed learning rate schedules
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lr-generator")]
#[command(version)]
#[command(about = "Generate per-step learning rate schedules from a YAML/JSON manifest")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate the schedule described by a manifest
    Generate(GenerateArgs),

    /// Validate a manifest without generating
    Validate(ValidateArgs),

    /// Summarize the schedule a manifest produces
    Info(InfoArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Path to the schedule manifest
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Override the manifest's global step
    #[arg(short, long)]
    pub global_step: Option<usize>,

    /// Output format (text, json, csv)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the schedule manifest
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to the schedule manifest
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for rendered schedules and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rate per line
    #[default]
    Text,
    /// JSON array of rates
    Json,
    /// `step,lr` rows with absolute step numbers
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, csv"
            )),
        }
    }
}

/// Parse CLI arguments from an iterator
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

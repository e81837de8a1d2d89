//! CLI argument types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hyperschedule: composable hyper-parameter schedules
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "hyperschedule")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Evaluate and inspect hyper-parameter schedules described in YAML or JSON")]
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
    /// Print schedule values for a range of iterations
    Eval(EvalArgs),

    /// Check that a configuration builds a valid schedule
    Validate(ValidateArgs),

    /// Describe the schedule tree in a configuration
    Info(InfoArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvalArgs {
    /// Path to YAML or JSON schedule configuration
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Number of iterations to evaluate (at most 1,000,000)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub steps: usize,

    /// First iteration index (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub start: usize,

    /// Output format (text, json, yaml, csv)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML or JSON schedule configuration
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML or JSON schedule configuration
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml, csv")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

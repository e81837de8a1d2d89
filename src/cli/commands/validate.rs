//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::load_config;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Validating: {}", args.config.display()));

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    config.build().map_err(|e| format!("Invalid schedule: {e}"))?;

    log(level, LogLevel::Verbose, &config.describe());
    log(level, LogLevel::Normal, &format!("✓ Schedule is valid ({})", config.kind()));
    Ok(())
}

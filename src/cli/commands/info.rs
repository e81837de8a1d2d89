//! Info command implementation

use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ScheduleConfig};

/// Render a configuration in the requested format.
pub fn render_info(config: &ScheduleConfig, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(config.describe()),
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| format!("YAML serialization error: {e}"))
        }
        OutputFormat::Csv => Err("The info command does not support csv output".to_string()),
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Schedule Info:");
    let rendered = render_info(&config, args.format)?;
    if level != LogLevel::Quiet {
        println!("{rendered}");
    }
    Ok(())
}

//! Logging utilities for CLI output

use tracing_subscriber::filter::LevelFilter;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Threshold for diagnostic records emitted through the `log` facade.
    pub fn filter(&self) -> LevelFilter {
        match self {
            LogLevel::Quiet => LevelFilter::ERROR,
            LogLevel::Normal => LevelFilter::WARN,
            LogLevel::Verbose => LevelFilter::DEBUG,
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Route library diagnostics to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(level: LogLevel) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        log::debug!("Diagnostics enabled at {}", level.filter());
    }
}

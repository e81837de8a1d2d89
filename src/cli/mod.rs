//! CLI module for hyperschedule
//!
//! Evaluates, validates and describes schedule configuration files.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, EvalArgs, InfoArgs, OutputFormat, ValidateArgs};
pub use commands::{evaluate, render_values, run_command, ValuePoint};
pub use logging::{init_tracing, LogLevel};

#[cfg(test)]
mod tests;

//! CLI command implementations

mod eval;
mod info;
mod validate;


use super::args::{Cli, Command};
use super::logging::{init_tracing, LogLevel};

pub use eval::{evaluate, render_values, ValuePoint, MAX_EVAL_STEPS};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);
    init_tracing(log_level);

    match cli.command {
        Command::Eval(args) => eval::run_eval(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}

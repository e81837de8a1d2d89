//! Hyperschedule CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the first 100 values of a schedule
//! hyperschedule eval schedule.yaml --steps 100
//!
//! # Export values as CSV starting at iteration 1000
//! hyperschedule eval schedule.yaml --start 1000 --steps 500 --format csv
//!
//! # Check a configuration
//! hyperschedule validate schedule.yaml
//!
//! # Show the schedule tree
//! hyperschedule info schedule.yaml
//! ```

use clap::Parser;
use hyperschedule::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! lr-generator CLI
//!
//! # Usage
//!
//! ```bash
//! # Print one rate per step
//! lr-generator generate schedule.yaml
//!
//! # Resume from step 5004, write CSV
//! lr-generator generate schedule.yaml --global-step 5004 --format csv -o lr.csv
//!
//! # Validate manifest
//! lr-generator validate schedule.yaml
//!
//! # Summarize schedule
//! lr-generator info schedule.yaml
//! ```

use clap::Parser;
use lr_generator::cli::{run_command, Cli};
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

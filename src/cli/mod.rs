//! Command-line interface for lr-generator
//!
//! ```bash
//! lr-generator generate schedule.yaml --format csv --output lr.csv
//! lr-generator generate schedule.yaml --global-step 5004
//! lr-generator validate schedule.yaml
//! lr-generator info schedule.yaml --format json
//! ```

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, GenerateArgs, InfoArgs, OutputFormat, ValidateArgs};
pub use commands::run_command;
pub use logging::LogLevel;

//! Generate command implementation

use crate::cli::logging::log;
use crate::cli::{GenerateArgs, LogLevel, OutputFormat};
use crate::error::{Error, Result};
use crate::manifest::{load_manifest, validate_manifest};
use crate::schedule::Schedule;
use std::fmt::Write as _;

/// Render `schedule` whose first entry is training step `start_step`
pub fn render_schedule(
    schedule: &Schedule,
    start_step: usize,
    format: OutputFormat,
) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            for lr in schedule {
                let _ = writeln!(out, "{lr}");
            }
        }
        OutputFormat::Csv => {
            out.push_str("step,lr\n");
            for (i, lr) in schedule.iter().enumerate() {
                let _ = writeln!(out, "{},{lr}", start_step + i);
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string(schedule)
                .map_err(|e| Error::Serialization(e.to_string()))?;
            out.push('\n');
        }
    }
    Ok(out)
}

fn generate(args: &GenerateArgs, level: LogLevel) -> Result<String> {
    let mut manifest = load_manifest(&args.manifest)?;
    if let Some(global_step) = args.global_step {
        manifest.global_step = global_step;
        validate_manifest(&manifest)?;
    }

    let schedule = manifest.generate()?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Generated {} {} steps from global step {}",
            schedule.len(),
            manifest.schedule.name(),
            manifest.global_step
        ),
    );

    render_schedule(&schedule, manifest.global_step, args.format)
}

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> std::result::Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading manifest: {}", args.manifest.display()),
    );

    let rendered = generate(&args, level).map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| Error::io(path, e).to_string())?;
            log(
                level,
                LogLevel::Normal,
                &format!("Schedule written to {}", path.display()),
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

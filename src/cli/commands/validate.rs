//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::manifest::{load_manifest, validate_manifest, ScheduleManifest, StepCounts};

/// Format the resolved step counts as a string
pub fn format_step_counts(manifest: &ScheduleManifest, counts: &StepCounts) -> String {
    [
        format!("  Schedule: {}", manifest.schedule.name()),
        format!("  Total steps: {}", counts.total_steps),
        format!("  Warmup steps: {}", counts.warmup_steps),
        format!("  Decay steps: {}", counts.decay_steps()),
        format!("  Global step: {}", manifest.global_step),
    ]
    .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating manifest: {}", args.manifest.display()),
    );

    let manifest = load_manifest(&args.manifest).map_err(|e| format!("Manifest error: {e}"))?;
    let counts = validate_manifest(&manifest).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Manifest is valid");
    log(level, LogLevel::Verbose, &format_step_counts(&manifest, &counts));

    Ok(())
}

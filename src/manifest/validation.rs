//! Manifest validation
//!
//! Catches bad ranges when the manifest is loaded, before any schedule is
//! generated.

use super::{ScheduleKind, ScheduleManifest};
use crate::schedule::{steps_for_epochs, ScheduleError, TOTAL_STEPS_FRACTION};
use thiserror::Error;

/// Validation result type
pub type ValidationResult<T> = Result<T, ManifestError>;

/// Manifest validation errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Invalid range for {field}: {value} (expected {constraint})")]
    InvalidRange {
        field: String,
        value: String,
        constraint: String,
    },

    #[error("global_step {global_step} is past the end of a {total_steps}-step schedule")]
    GlobalStepOutOfRange {
        global_step: usize,
        total_steps: usize,
    },

    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

/// Step counts a manifest resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounts {
    pub total_steps: usize,
    pub warmup_steps: usize,
}

impl StepCounts {
    /// Steps left after warmup
    pub fn decay_steps(&self) -> usize {
        self.total_steps.saturating_sub(self.warmup_steps)
    }
}

/// Validate a schedule manifest
///
/// Checks, in order:
/// 1. Rates are finite and non-negative, peak rates positive
/// 2. Step counts are non-zero and consistent
/// 3. `global_step` lies within the schedule
pub fn validate_manifest(manifest: &ScheduleManifest) -> ValidationResult<StepCounts> {
    let counts = match &manifest.schedule {
        ScheduleKind::Decay(config) => {
            validate_positive("lr_max", config.lr_max)?;
            validate_non_negative("lr_init", config.lr_init)?;
            validate_non_negative("lr_end", config.lr_end)?;
            validate_nonzero("steps_per_epoch", config.steps_per_epoch as usize)?;
            validate_nonzero("total_epochs", config.total_epochs as usize)?;

            let (total_steps, warmup_steps) = config.validate()?;
            StepCounts {
                total_steps,
                warmup_steps,
            }
        }
        ScheduleKind::CosineAnnealing(c) => {
            validate_positive("base_lr", c.base_lr)?;
            cosine_counts(c.steps_per_epoch, c.warmup_epochs, c.max_epoch, 1.0)?
        }
        ScheduleKind::WarmupCosineAnnealing(c) => {
            validate_positive("base_lr", c.base_lr)?;
            validate_positive("num_periods", c.num_periods)?;
            cosine_counts(
                c.steps_per_epoch,
                c.warmup_epochs,
                c.max_epoch,
                TOTAL_STEPS_FRACTION,
            )?
        }
    };

    if manifest.global_step > counts.total_steps {
        return Err(ManifestError::GlobalStepOutOfRange {
            global_step: manifest.global_step,
            total_steps: counts.total_steps,
        });
    }

    Ok(counts)
}

fn cosine_counts(
    steps_per_epoch: usize,
    warmup_epochs: f64,
    max_epoch: f64,
    scale: f64,
) -> ValidationResult<StepCounts> {
    validate_nonzero("steps_per_epoch", steps_per_epoch)?;
    validate_non_negative("warmup_epochs", warmup_epochs)?;
    validate_positive("max_epoch", max_epoch)?;

    let total_steps = steps_for_epochs("max_epoch", max_epoch, steps_per_epoch, scale)?;
    let warmup_steps = steps_for_epochs("warmup_epochs", warmup_epochs, steps_per_epoch, 1.0)?;
    if total_steps <= warmup_steps {
        return Err(ManifestError::InvalidRange {
            field: "max_epoch".to_string(),
            value: format!("{max_epoch} ({total_steps} steps)"),
            constraint: format!("more steps than the {warmup_steps} warmup steps"),
        });
    }

    Ok(StepCounts {
        total_steps,
        warmup_steps,
    })
}

fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "> 0".to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: ">= 0".to_string(),
        });
    }
    Ok(())
}

fn validate_nonzero(field: &str, value: usize) -> ValidationResult<()> {
    if value == 0 {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: "0".to_string(),
            constraint: "> 0".to_string(),
        });
    }
    Ok(())
}

//! Linear warmup

use super::error::{Result, ScheduleError};
use super::sequence::MAX_STEPS;

/// Rate at `current_step` of a linear ramp from `init_rate` to `base_rate`
///
/// `current_step` is 1-based: the ramp reaches `base_rate` at
/// `current_step == warmup_steps`.
///
/// Formula: lr = init_rate + (base_rate - init_rate) / warmup_steps * current_step
pub fn linear_warmup_rate(
    current_step: usize,
    warmup_steps: usize,
    base_rate: f64,
    init_rate: f64,
) -> Result<f64> {
    if warmup_steps == 0 {
        return Err(ScheduleError::config(
            "warmup_steps",
            "linear warmup needs at least one warmup step",
        ));
    }
    let lr_inc = (base_rate - init_rate) / warmup_steps as f64;
    Ok(init_rate + lr_inc * current_step as f64)
}

/// Convert a (possibly fractional) epoch count into whole steps, truncating
///
/// `scale` shortens the run (the damped cosine schedule covers 99% of it).
pub fn steps_for_epochs(
    field: &str,
    epochs: f64,
    steps_per_epoch: usize,
    scale: f64,
) -> Result<usize> {
    let steps = epochs * steps_per_epoch as f64 * scale;
    if !steps.is_finite() || steps < 0.0 {
        return Err(ScheduleError::config(
            field,
            format!("{epochs} epochs of {steps_per_epoch} steps is not a valid step count"),
        ));
    }
    if steps > MAX_STEPS as f64 {
        return Err(ScheduleError::config(
            field,
            format!("{epochs} epochs of {steps_per_epoch} steps exceeds the {MAX_STEPS} step limit"),
        ));
    }
    Ok(steps as usize)
}

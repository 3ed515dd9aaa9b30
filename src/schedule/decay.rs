//! Epoch-configured warmup + decay schedules

use super::config::{DecayMode, ScheduleConfig};
use super::error::Result;
use super::sequence::Schedule;

/// Fractions of training at which `Steps` mode drops the rate
const STEP_BOUNDARIES: [f64; 3] = [0.3, 0.6, 0.8];

/// Generate the schedule for `config` and return it from `global_step` on
///
/// The full `total_steps` sequence is built first, so the rate at index 0 of
/// the result is the rate for step `global_step` of training.
///
/// # Errors
/// - [`ScheduleError::Configuration`](super::ScheduleError::Configuration) if
///   the config fails [`ScheduleConfig::validate`]
/// - [`ScheduleError::Range`](super::ScheduleError::Range) if `global_step`
///   is past `total_steps`
pub fn get_lr(global_step: usize, config: &ScheduleConfig) -> Result<Schedule> {
    let (total_steps, warmup_steps) = config.validate()?;

    let rates = match config.decay_mode {
        DecayMode::Steps => steps_rates(config, total_steps),
        DecayMode::Poly => poly_rates(config, total_steps, warmup_steps),
        DecayMode::Linear => linear_rates(config, total_steps, warmup_steps),
    };

    Schedule::from_rates(rates).suffix(global_step)
}

/// Piecewise constant: lr_max, then 0.1x, 0.01x and 0.001x of it
///
/// Boundaries are fractional step positions and are not rounded, so a step
/// index equal to the truncated boundary still belongs to the earlier stage.
fn steps_rates(config: &ScheduleConfig, total_steps: usize) -> Vec<f64> {
    let boundaries = STEP_BOUNDARIES.map(|frac| frac * total_steps as f64);

    (0..total_steps)
        .map(|i| {
            let step = i as f64;
            if step < boundaries[0] {
                config.lr_max
            } else if step < boundaries[1] {
                config.lr_max * 0.1
            } else if step < boundaries[2] {
                config.lr_max * 0.01
            } else {
                config.lr_max * 0.001
            }
        })
        .collect()
}

/// Linear warmup from lr_init, then quadratic decay from lr_max to zero
///
/// With no warmup steps the increment is zero and the warmup branch is never
/// taken.
fn poly_rates(config: &ScheduleConfig, total_steps: usize, warmup_steps: usize) -> Vec<f64> {
    let inc_each_step = if warmup_steps != 0 {
        (config.lr_max - config.lr_init) / warmup_steps as f64
    } else {
        0.0
    };

    (0..total_steps)
        .map(|i| {
            if i < warmup_steps {
                config.lr_init + inc_each_step * i as f64
            } else {
                let base = 1.0
                    - (i as f64 - warmup_steps as f64)
                        / (total_steps as f64 - warmup_steps as f64);
                (config.lr_max * base * base).max(0.0)
            }
        })
        .collect()
}

/// Linear warmup from lr_init to lr_max, then linear decay to lr_end
fn linear_rates(config: &ScheduleConfig, total_steps: usize, warmup_steps: usize) -> Vec<f64> {
    (0..total_steps)
        .map(|i| {
            if i < warmup_steps {
                config.lr_init + (config.lr_max - config.lr_init) * i as f64 / warmup_steps as f64
            } else {
                config.lr_max
                    - (config.lr_max - config.lr_end) * (i - warmup_steps) as f64
                        / (total_steps - warmup_steps) as f64
            }
        })
        .collect()
}

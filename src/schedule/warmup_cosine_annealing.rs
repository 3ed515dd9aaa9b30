//! Warmup followed by linearly damped cosine decay

use super::config::ensure_finite;
use super::cosine_annealing::decay_steps;
use super::error::Result;
use super::sequence::Schedule;
use super::warmup::{linear_warmup_rate, steps_for_epochs};
use std::f64::consts::PI;

/// Default number of cosine periods over the decay phase (a half wave)
pub const DEFAULT_NUM_PERIODS: f64 = 0.5;

/// Fraction of `max_epoch` the schedule covers
pub const TOTAL_STEPS_FRACTION: f64 = 0.99;

/// Rate floor added to every decay step
const LR_FLOOR: f64 = 0.000005;

/// Linear warmup from 0 to `base_rate`, then cosine decay damped by a linear ramp
///
/// Covers `floor(max_epoch * steps_per_epoch * 0.99)` steps. After warmup:
///
/// ```text
/// linear_decay = (total_steps - i) / decay_steps
/// cosine_decay = 0.5 * (1 + cos(2π * num_periods * i / decay_steps))
/// lr_i         = base_rate * linear_decay * cosine_decay + 5e-6
/// ```
pub fn warmup_cosine_annealing_schedule(
    base_rate: f64,
    steps_per_epoch: usize,
    warmup_epochs: f64,
    max_epoch: f64,
    num_periods: f64,
) -> Result<Schedule> {
    ensure_finite("base_lr", base_rate)?;
    ensure_finite("num_periods", num_periods)?;
    let total_steps =
        steps_for_epochs("max_epoch", max_epoch, steps_per_epoch, TOTAL_STEPS_FRACTION)?;
    let warmup_steps = steps_for_epochs("warmup_epochs", warmup_epochs, steps_per_epoch, 1.0)?;
    let decay_steps = decay_steps(total_steps, warmup_steps)?;

    let rates = (0..total_steps)
        .map(|i| {
            if i < warmup_steps {
                return linear_warmup_rate(i + 1, warmup_steps, base_rate, 0.0);
            }
            let linear_decay = (total_steps - i) as f64 / decay_steps;
            let cosine_decay =
                0.5 * (1.0 + (PI * 2.0 * num_periods * i as f64 / decay_steps).cos());
            Ok(base_rate * linear_decay * cosine_decay + LR_FLOOR)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Schedule::from_rates(rates))
}

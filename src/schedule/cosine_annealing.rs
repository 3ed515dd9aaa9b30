//! Warmup followed by half-cosine annealing to zero

use super::config::ensure_finite;
use super::error::{Result, ScheduleError};
use super::sequence::Schedule;
use super::warmup::{linear_warmup_rate, steps_for_epochs};
use std::f64::consts::PI;

/// Linear warmup from 0 to `base_rate`, then cosine decay towards 0
///
/// Produces `floor(max_epoch * steps_per_epoch)` steps, the first
/// `floor(warmup_epochs * steps_per_epoch)` of which are warmup.
///
/// Decay phase: lr_i = base_rate * 0.5 * (1 + cos(π * i / decay_steps))
///
/// The cosine phase is measured from step 0, not from the end of warmup, so
/// with a non-zero warmup the first decay step starts below `base_rate`.
///
/// # Errors
/// [`ScheduleError::Configuration`] if `base_rate` is not finite, or unless
/// the total step count is strictly greater than the warmup step count.
pub fn cosine_annealing_schedule(
    base_rate: f64,
    steps_per_epoch: usize,
    warmup_epochs: f64,
    max_epoch: f64,
) -> Result<Schedule> {
    ensure_finite("base_lr", base_rate)?;
    let total_steps = steps_for_epochs("max_epoch", max_epoch, steps_per_epoch, 1.0)?;
    let warmup_steps = steps_for_epochs("warmup_epochs", warmup_epochs, steps_per_epoch, 1.0)?;
    let decay_steps = decay_steps(total_steps, warmup_steps)?;

    let rates = (0..total_steps)
        .map(|i| {
            if i < warmup_steps {
                linear_warmup_rate(i + 1, warmup_steps, base_rate, 0.0)
            } else {
                let cosine_decay = 0.5 * (1.0 + (PI * i as f64 / decay_steps).cos());
                Ok(base_rate * cosine_decay)
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Schedule::from_rates(rates))
}

/// Steps left after warmup, as the cosine denominator
pub(super) fn decay_steps(total_steps: usize, warmup_steps: usize) -> Result<f64> {
    match total_steps.checked_sub(warmup_steps) {
        Some(steps) if steps > 0 => Ok(steps as f64),
        _ => Err(ScheduleError::config(
            "max_epoch",
            format!(
                "{total_steps} total steps leaves no decay phase after {warmup_steps} warmup steps"
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cosine_annealing_length() {
        let schedule = cosine_annealing_schedule(0.1, 10, 1.0, 5.0).unwrap();
        assert_eq!(schedule.len(), 50);
    }

    #[test]
    fn test_cosine_annealing_fractional_epochs() {
        let schedule = cosine_annealing_schedule(0.1, 4, 0.5, 2.75).unwrap();
        assert_eq!(schedule.len(), 11);
    }

    #[test]
    fn test_cosine_annealing_warmup_ramp() {
        let schedule = cosine_annealing_schedule(1.0, 10, 1.0, 5.0).unwrap();
        // Warmup is 1-based: step 0 already holds base_rate / warmup_steps
        assert_abs_diff_eq!(schedule[0], 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(schedule[4], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(schedule[9], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_annealing_without_warmup_starts_at_base() {
        let schedule = cosine_annealing_schedule(1.0, 100, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(schedule[0], 1.0, epsilon = 1e-6);
        // Midpoint: cos(π/2) = 0
        assert_abs_diff_eq!(schedule[50], 0.5, epsilon = 1e-6);
        assert!(schedule[99] < 1e-3);
    }

    #[test]
    fn test_cosine_annealing_phase_counts_from_step_zero() {
        let schedule = cosine_annealing_schedule(1.0, 10, 1.0, 5.0).unwrap();
        let expected = 0.5 * (1.0 + (PI * 10.0 / 40.0).cos());
        assert_abs_diff_eq!(schedule[10], expected as f32, epsilon = 1e-6);
    }

    #[test]
    fn test_cosine_annealing_decreases_until_decay_steps() {
        // 50 steps, 10 warmup: cosine bottoms out at i = decay_steps = 40
        let schedule = cosine_annealing_schedule(1.0, 10, 1.0, 5.0).unwrap();
        for pair in schedule[10..=40].windows(2) {
            assert!(pair[1] <= pair[0], "rate should not increase: {pair:?}");
        }
        assert!(schedule[40] < 1e-6);
        assert!(schedule[49] > schedule[40]);
    }

    #[test]
    fn test_cosine_annealing_without_decay_phase_is_error() {
        assert!(matches!(
            cosine_annealing_schedule(0.1, 10, 5.0, 5.0),
            Err(ScheduleError::Configuration { .. })
        ));
        assert!(cosine_annealing_schedule(0.1, 10, 6.0, 5.0).is_err());
        assert!(cosine_annealing_schedule(0.1, 0, 0.0, 5.0).is_err());
    }

    #[test]
    fn test_cosine_annealing_non_finite_base_rate_rejected() {
        for base_rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = cosine_annealing_schedule(base_rate, 10, 1.0, 5.0).unwrap_err();
            assert!(
                matches!(err, ScheduleError::Configuration { ref field, .. } if field == "base_lr")
            );
        }
    }

    #[test]
    fn test_cosine_annealing_huge_max_epoch_rejected() {
        let err = cosine_annealing_schedule(0.1, 10, 0.0, 1e30).unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration { ref field, .. } if field == "max_epoch"));
    }
}

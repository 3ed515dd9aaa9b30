//! Precomputed per-step learning rate sequence

use super::error::{Result, ScheduleError};
use serde::Serialize;
use std::ops::Deref;

/// Upper bound on the number of steps a schedule may cover
///
/// Step counts come from epoch arithmetic on user input; anything above this
/// is rejected as a configuration error before any rates are allocated.
pub const MAX_STEPS: usize = 100_000_000;

/// Learning rates for consecutive training steps
///
/// Index `i` holds the rate to apply at step `i`. Rates are computed in `f64`
/// and narrowed to `f32` once, when the schedule is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    rates: Vec<f32>,
}

impl Schedule {
    /// Narrow `f64` rates into a schedule
    pub fn from_rates(rates: Vec<f64>) -> Self {
        Self {
            rates: rates.into_iter().map(|lr| lr as f32).collect(),
        }
    }

    /// Number of steps covered
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the schedule covers no steps
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate at `step`, if covered
    pub fn get(&self, step: usize) -> Option<f32> {
        self.rates.get(step).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.rates.iter()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.rates
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.rates
    }

    /// Drop the first `global_step` rates
    ///
    /// `global_step == len()` yields an empty schedule; anything past the end
    /// is a [`ScheduleError::Range`].
    pub fn suffix(mut self, global_step: usize) -> Result<Self> {
        if global_step > self.rates.len() {
            return Err(ScheduleError::Range {
                global_step,
                total_steps: self.rates.len(),
            });
        }
        self.rates.drain(..global_step);
        Ok(self)
    }

    /// First, last and peak rates
    pub fn summary(&self) -> Option<ScheduleSummary> {
        let first = *self.rates.first()?;
        let last = *self.rates.last()?;
        let (peak_step, peak) = self
            .rates
            .iter()
            .copied()
            .enumerate()
            .fold((0, first), |best, (i, lr)| if lr > best.1 { (i, lr) } else { best });

        Some(ScheduleSummary {
            len: self.rates.len(),
            first,
            last,
            peak,
            peak_step,
        })
    }
}

impl Deref for Schedule {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.rates
    }
}

impl From<Schedule> for Vec<f32> {
    fn from(schedule: Schedule) -> Self {
        schedule.rates
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}

/// Condensed view of a schedule for reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub len: usize,
    pub first: f32,
    pub last: f32,
    pub peak: f32,
    /// Index of the first occurrence of `peak`
    pub peak_step: usize,
}

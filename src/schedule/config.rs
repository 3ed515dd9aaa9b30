//! Epoch-based schedule configuration

use super::error::{Result, ScheduleError};
use super::sequence::MAX_STEPS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decay policy applied after warmup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayMode {
    /// Piecewise constant, dropping 10x at 30%, 60% and 80% of training
    Steps,
    /// Quadratic decay from `lr_max` to zero
    Poly,
    /// Straight line from `lr_max` to `lr_end`
    #[default]
    Linear,
}

impl DecayMode {
    /// Names accepted by [`FromStr`]
    pub const NAMES: &'static [&'static str] = &["steps", "poly", "linear"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Poly => "poly",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecayMode {
    type Err = ScheduleError;

    /// Names are lowercase only, matching the manifest schema
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "steps" => Ok(Self::Steps),
            "poly" => Ok(Self::Poly),
            "linear" => Ok(Self::Linear),
            other => Err(ScheduleError::config(
                "decay_mode",
                format!("unknown mode '{other}' (valid: {})", Self::NAMES.join(", ")),
            )),
        }
    }
}

/// Training configuration a decay schedule is generated from
///
/// Counts are in epochs; the schedule itself operates per step, with
/// `steps_per_epoch` steps in each epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Rate at step 0 of warmup
    pub lr_init: f64,
    /// Rate reached at the last step (linear mode only)
    pub lr_end: f64,
    /// Peak rate, reached when warmup ends
    pub lr_max: f64,
    #[serde(default)]
    pub warmup_epochs: u32,
    pub total_epochs: u32,
    pub steps_per_epoch: u32,
    #[serde(default)]
    pub decay_mode: DecayMode,
}

impl ScheduleConfig {
    /// `steps_per_epoch * total_epochs`
    pub fn total_steps(&self) -> Result<usize> {
        epochs_to_steps("total_epochs", self.steps_per_epoch, self.total_epochs)
    }

    /// `steps_per_epoch * warmup_epochs`
    pub fn warmup_steps(&self) -> Result<usize> {
        epochs_to_steps("warmup_epochs", self.steps_per_epoch, self.warmup_epochs)
    }

    /// Check that every formula is defined for this configuration
    ///
    /// Returns `(total_steps, warmup_steps)`.
    pub fn validate(&self) -> Result<(usize, usize)> {
        for (field, value) in [
            ("lr_init", self.lr_init),
            ("lr_end", self.lr_end),
            ("lr_max", self.lr_max),
        ] {
            ensure_finite(field, value)?;
        }

        let total_steps = self.total_steps()?;
        let warmup_steps = self.warmup_steps()?;
        if warmup_steps > total_steps {
            return Err(ScheduleError::config(
                "warmup_epochs",
                format!("warmup of {warmup_steps} steps exceeds the {total_steps} total steps"),
            ));
        }
        Ok((total_steps, warmup_steps))
    }
}

/// Reject NaN and infinite rates
pub(super) fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ScheduleError::config(field, format!("{value} is not finite")));
    }
    Ok(())
}

fn epochs_to_steps(field: &str, steps_per_epoch: u32, epochs: u32) -> Result<usize> {
    usize::try_from(steps_per_epoch)
        .ok()
        .zip(usize::try_from(epochs).ok())
        .and_then(|(spe, epochs)| spe.checked_mul(epochs))
        .filter(|&steps| steps <= MAX_STEPS)
        .ok_or_else(|| {
            ScheduleError::config(
                field,
                format!(
                    "{epochs} epochs of {steps_per_epoch} steps exceeds the {MAX_STEPS} step limit"
                ),
            )
        })
}

//! Schedule manifests
//!
//! A manifest is a YAML (or JSON) file describing one schedule and the global
//! step to resume from:
//!
//! ```yaml
//! global_step: 0
//! schedule:
//!   kind: decay
//!   lr_init: 0.0
//!   lr_end: 0.0
//!   lr_max: 0.1
//!   warmup_epochs: 2
//!   total_epochs: 90
//!   steps_per_epoch: 5004
//!   decay_mode: poly
//! ```

mod validation;


pub use validation::{validate_manifest, ManifestError, StepCounts, ValidationResult};

use crate::error::{Error, Result};
use crate::schedule::{
    cosine_annealing_schedule, get_lr, warmup_cosine_annealing_schedule, Schedule,
    ScheduleConfig, DEFAULT_NUM_PERIODS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleManifest {
    /// Step to resume from; the generated schedule starts here
    #[serde(default)]
    pub global_step: usize,

    pub schedule: ScheduleKind,
}

/// Which generator to run, with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Warmup + step / poly / linear decay
    Decay(ScheduleConfig),
    /// Warmup + half-cosine decay
    CosineAnnealing(CosineAnnealingConfig),
    /// Warmup + linearly damped cosine decay
    WarmupCosineAnnealing(WarmupCosineAnnealingConfig),
}

impl ScheduleKind {
    /// Schema name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decay(_) => "decay",
            Self::CosineAnnealing(_) => "cosine_annealing",
            Self::WarmupCosineAnnealing(_) => "warmup_cosine_annealing",
        }
    }
}

/// Parameters of [`cosine_annealing_schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CosineAnnealingConfig {
    pub base_lr: f64,
    pub steps_per_epoch: usize,
    #[serde(default)]
    pub warmup_epochs: f64,
    pub max_epoch: f64,
}

/// Parameters of [`warmup_cosine_annealing_schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WarmupCosineAnnealingConfig {
    pub base_lr: f64,
    pub steps_per_epoch: usize,
    #[serde(default)]
    pub warmup_epochs: f64,
    pub max_epoch: f64,
    /// Cosine periods over the decay phase
    #[serde(default = "default_num_periods")]
    pub num_periods: f64,
}

fn default_num_periods() -> f64 {
    DEFAULT_NUM_PERIODS
}

impl ScheduleManifest {
    /// Generate the schedule, starting at `global_step`
    ///
    /// The cosine generators have no global step of their own; their full
    /// schedule is sliced the same way [`get_lr`] slices its own.
    pub fn generate(&self) -> Result<Schedule> {
        let schedule = match &self.schedule {
            ScheduleKind::Decay(config) => return Ok(get_lr(self.global_step, config)?),
            ScheduleKind::CosineAnnealing(c) => cosine_annealing_schedule(
                c.base_lr,
                c.steps_per_epoch,
                c.warmup_epochs,
                c.max_epoch,
            )?,
            ScheduleKind::WarmupCosineAnnealing(c) => warmup_cosine_annealing_schedule(
                c.base_lr,
                c.steps_per_epoch,
                c.warmup_epochs,
                c.max_epoch,
                c.num_periods,
            )?,
        };
        Ok(schedule.suffix(self.global_step)?)
    }
}

/// On-disk manifest encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// `.json` files are JSON, everything else YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse and validate manifest text
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<ScheduleManifest> {
    let manifest: ScheduleManifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| Error::Parse(format!("Failed to parse YAML manifest: {e}")))?,
        ManifestFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::Parse(format!("Failed to parse JSON manifest: {e}")))?,
    };

    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Load and validate a manifest file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<ScheduleManifest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_manifest(&content, ManifestFormat::from_path(path))
}

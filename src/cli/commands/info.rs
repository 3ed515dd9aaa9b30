//! Info command implementation

use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::manifest::{load_manifest, validate_manifest, ScheduleManifest};
use crate::schedule::ScheduleSummary;
use serde::Serialize;

/// What `info` reports about a manifest
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleInfo {
    pub kind: &'static str,
    pub global_step: usize,
    pub total_steps: usize,
    pub warmup_steps: usize,
    /// `None` when `global_step` is the end of the schedule
    pub summary: Option<ScheduleSummary>,
}

impl ScheduleInfo {
    pub fn from_manifest(manifest: &ScheduleManifest) -> crate::Result<Self> {
        let counts = validate_manifest(manifest)?;
        let schedule = manifest.generate()?;
        Ok(Self {
            kind: manifest.schedule.name(),
            global_step: manifest.global_step,
            total_steps: counts.total_steps,
            warmup_steps: counts.warmup_steps,
            summary: schedule.summary(),
        })
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Schedule: {}", self.kind),
            format!("Total steps: {}", self.total_steps),
            format!("Warmup steps: {}", self.warmup_steps),
            format!("Global step: {}", self.global_step),
        ];
        match &self.summary {
            Some(s) => {
                lines.push(format!("Remaining steps: {}", s.len));
                lines.push(format!("First lr: {}", s.first));
                lines.push(format!(
                    "Peak lr: {} (step {})",
                    s.peak,
                    self.global_step + s.peak_step
                ));
                lines.push(format!("Last lr: {}", s.last));
            }
            None => lines.push("Remaining steps: 0".to_string()),
        }
        lines.join("\n")
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let manifest = load_manifest(&args.manifest).map_err(|e| format!("Manifest error: {e}"))?;
    let info = ScheduleInfo::from_manifest(&manifest).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&info)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text | OutputFormat::Csv => {
            log(level, LogLevel::Normal, "Schedule Info:");
            println!("{}", info.to_text());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ScheduleKind;
    use crate::schedule::{DecayMode, ScheduleConfig};

    fn manifest(global_step: usize) -> ScheduleManifest {
        ScheduleManifest {
            global_step,
            schedule: ScheduleKind::Decay(ScheduleConfig {
                lr_init: 0.0,
                lr_end: 0.0,
                lr_max: 1.0,
                warmup_epochs: 1,
                total_epochs: 2,
                steps_per_epoch: 10,
                decay_mode: DecayMode::Poly,
            }),
        }
    }

    #[test]
    fn test_info_reports_peak_after_warmup() {
        let info = ScheduleInfo::from_manifest(&manifest(0)).unwrap();
        assert_eq!(info.kind, "decay");
        assert_eq!(info.total_steps, 20);
        assert_eq!(info.warmup_steps, 10);

        let summary = info.summary.unwrap();
        assert_eq!(summary.len, 20);
        assert_eq!(summary.peak_step, 10);
        assert!(info.to_text().contains("Peak lr: 1 (step 10)"));
    }

    #[test]
    fn test_info_offsets_peak_by_global_step() {
        let info = ScheduleInfo::from_manifest(&manifest(5)).unwrap();
        assert_eq!(info.summary.unwrap().peak_step, 5);
        assert!(info.to_text().contains("(step 10)"));
    }

    #[test]
    fn test_info_at_end_of_schedule() {
        let info = ScheduleInfo::from_manifest(&manifest(20)).unwrap();
        assert!(info.summary.is_none());
        assert!(info.to_text().contains("Remaining steps: 0"));
    }

    #[test]
    fn test_info_serializes_to_json() {
        let info = ScheduleInfo::from_manifest(&manifest(0)).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["kind"], "decay");
        assert_eq!(json["summary"]["peak_step"], 10);
    }
}

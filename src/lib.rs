//! # lr-generator
//!
//! Precomputed learning rate schedules for training loops. A schedule is
//! generated once from an epoch-based configuration and handed to the caller
//! as one `f32` rate per training step.
//!
//! ```
//! use lr_generator::schedule::{get_lr, DecayMode, ScheduleConfig};
//!
//! let config = ScheduleConfig {
//!     lr_init: 0.0,
//!     lr_end: 0.0,
//!     lr_max: 0.1,
//!     warmup_epochs: 1,
//!     total_epochs: 10,
//!     steps_per_epoch: 100,
//!     decay_mode: DecayMode::Poly,
//! };
//!
//! // Resume at step 250 of 1000
//! let schedule = get_lr(250, &config).unwrap();
//! assert_eq!(schedule.len(), 750);
//! ```
//!
//! - [`schedule`] - the generators and the [`Schedule`](schedule::Schedule) type
//! - [`manifest`] - YAML/JSON schedule manifests and their validation
//! - [`cli`] - the `lr-generator` command-line front end

pub mod cli;
pub mod error;
pub mod manifest;
pub mod schedule;

pub use error::{Error, Result};
pub use manifest::{load_manifest, ScheduleKind, ScheduleManifest};
pub use schedule::{
    cosine_annealing_schedule, get_lr, linear_warmup_rate, warmup_cosine_annealing_schedule,
    DecayMode, LRScheduler, Schedule, ScheduleConfig, ScheduleCursor, ScheduleError,
};

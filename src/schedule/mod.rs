//! Precomputed learning rate schedules
//!
//! Every generator returns the full per-step [`Schedule`] up front:
//! - [`get_lr`] - Warmup + step / polynomial / linear decay, configured in epochs
//! - [`cosine_annealing_schedule`] - Warmup + half-cosine decay to zero
//! - [`warmup_cosine_annealing_schedule`] - Warmup + linearly damped cosine decay
//! - [`linear_warmup_rate`] - Single point of a linear warmup ramp
//!
//! [`ScheduleCursor`] hands a generated schedule to a training loop one step
//! at a time.

mod config;
mod cosine_annealing;
mod cursor;
mod decay;
mod error;
mod sequence;
mod warmup;
mod warmup_cosine_annealing;


pub use config::{DecayMode, ScheduleConfig};
pub use cosine_annealing::cosine_annealing_schedule;
pub use cursor::{LRScheduler, ScheduleCursor};
pub use decay::get_lr;
pub use error::{Result, ScheduleError};
pub use sequence::{Schedule, ScheduleSummary, MAX_STEPS};
pub use warmup::{linear_warmup_rate, steps_for_epochs};
pub use warmup_cosine_annealing::{
    warmup_cosine_annealing_schedule, DEFAULT_NUM_PERIODS, TOTAL_STEPS_FRACTION,
};

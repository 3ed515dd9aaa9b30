//! Schedule generation errors

use thiserror::Error;

/// Errors raised while generating a learning rate schedule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Step counts or rates that make a formula undefined
    #[error("Invalid schedule configuration for '{field}': {message}\n  → Check the epoch counts and steps_per_epoch")]
    Configuration { field: String, message: String },

    /// Global step outside `[0, total_steps]`
    #[error("Global step {global_step} is out of range for a schedule of {total_steps} steps\n  → Use a global step between 0 and {total_steps}")]
    Range { global_step: usize, total_steps: usize },
}

impl ScheduleError {
    /// Create a configuration error for `field`
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for schedule generation
pub type Result<T> = std::result::Result<T, ScheduleError>;

//! Error types with actionable diagnostics

use crate::manifest::ManifestError;
use crate::schedule::ScheduleError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lr-generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by manifest loading, validation and schedule generation
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest file could not be read or written
    #[error("IO error on {path}: {source}\n  → Check that the file exists and is readable")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest text is not valid YAML/JSON for the schema
    #[error("{0}\n  → Check the manifest syntax and field names")]
    Parse(String),

    /// Manifest parsed but failed validation
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Schedule could not be generated
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Rendering the schedule failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an IO error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the caller can fix this by editing the manifest or arguments
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Manifest(_) | Self::Schedule(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = Error::io(
            "/tmp/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.yaml"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_schedule_error_is_transparent() {
        let err: Error = ScheduleError::Range {
            global_step: 5,
            total_steps: 4,
        }
        .into();
        assert!(err.to_string().contains("Global step 5"));
        assert!(err.is_user_error());
    }
}

use thiserror::Error;

use common::error::Error as ProbeError;

/// Exit code for a failed buffer allocation.
pub const EXIT_ALLOCATION_FAILED: i32 = 1;

/// Exit code for configuration that cannot be loaded or is out of range.
pub const EXIT_INVALID_CONFIG: i32 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting {
        key: &'static str,
        reason: &'static str,
    },

    #[error("Probe error: {0}")]
    ProbeError(#[from] ProbeError),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ProbeError(_) => EXIT_ALLOCATION_FAILED,
            Error::ConfigLoadError(_) | Error::InvalidSetting { .. } => EXIT_INVALID_CONFIG,
        }
    }
}

//! Error types for the campaign simulator.
//!
//! Only argument validation can fail. Everything downstream of a valid
//! configuration is a total function.

use thiserror::Error;

/// Errors raised by the universe generator, the sampler and config validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: String,
    },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: i64, reason: impl Into<String>) -> Self {
        SimError::InvalidArgument {
            name,
            value,
            reason: reason.into(),
        }
    }
}

/// Saturating conversion for reporting sizes in [`SimError::InvalidArgument`].
pub(crate) fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

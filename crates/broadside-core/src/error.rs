//! Error taxonomy shared by the simulation crates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ShipId;

/// Errors raised by simulation operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// The ship id was never registered or has been torn down.
    #[error("{0} is not registered")]
    NotFound(ShipId),
    /// The operation does not apply to the ship's current state.
    #[error("invalid state for {ship}: {reason}")]
    InvalidState { ship: ShipId, reason: &'static str },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse broadside config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read broadside config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Returns an error unless `value` is a finite number greater than zero.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}

//! Error type for simulation setup.

use std::error::Error;
use std::fmt;
use stria_core::{ConfigError, ParamError};

/// Errors raised before the stepping loop begins.
///
/// The stepper itself has no failure paths; everything that can go
/// wrong is caught during validation and initialization.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A numeric parameter violated a hard invariant.
    Param(ParamError),
    /// The run configuration was unrecognized or inapplicable.
    Config(ConfigError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(e) => write!(f, "invalid parameter: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Param(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ParamError> for SimError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

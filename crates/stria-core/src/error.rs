//! Error types for parameter validation and run configuration.
//!
//! Two fail-fast families: [`ParamError`] for numeric invariants of the
//! parameter set, [`ConfigError`] for unrecognized or inapplicable
//! configuration tags. Both are raised before any stepping begins;
//! numerical degeneracy inside the steady-state solver is deliberately
//! NOT an error (see `stria-kinetics`).

use std::error::Error;
use std::fmt;

/// A numeric parameter violates a hard invariant.
///
/// Returned by [`Params::validate()`](crate::Params::validate). These are
/// not recoverable; the run must not start.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// A parameter that must be strictly positive is zero or negative
    /// (`dt`, `dx`, half-saturation constants, `stopping_threshold`).
    NonPositive {
        /// Parameter name as it appears in the schema.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A parameter that must be non-negative is negative
    /// (decay rates, production rates, `basal_prod`, diffusion coefficients).
    Negative {
        /// Parameter name as it appears in the schema.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Parameter name as it appears in the schema.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The lattice has fewer than 3 cells; interior updates need at
    /// least one point with two neighbours.
    GridTooSmall {
        /// The configured cell count.
        n: usize,
    },
    /// The step budget is zero.
    NoSteps,
    /// The snapshot interval is zero.
    SaveEveryZero,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { name, value } => {
                write!(f, "parameter '{name}' must be > 0, got {value}")
            }
            Self::Negative { name, value } => {
                write!(f, "parameter '{name}' must be >= 0, got {value}")
            }
            Self::NonFinite { name, value } => {
                write!(f, "parameter '{name}' must be finite, got {value}")
            }
            Self::GridTooSmall { n } => {
                write!(f, "grid needs at least 3 cells, got {n}")
            }
            Self::NoSteps => write!(f, "step budget must be at least 1"),
            Self::SaveEveryZero => write!(f, "save_every must be at least 1"),
        }
    }
}

impl Error for ParamError {}

/// A configuration tag is unrecognized, or a mode is inapplicable to
/// the configured lattice.
///
/// Raised at setup, before the stepping loop begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An `init_mode` tag did not match any known initialization policy.
    UnknownInitMode {
        /// The unrecognized tag.
        tag: String,
    },
    /// An `activator_type` tag did not match any known transport mode.
    UnknownTransportMode {
        /// The unrecognized tag.
        tag: String,
    },
    /// A sweep or override referenced a parameter name that does not
    /// exist in the schema.
    UnknownParameter {
        /// The unrecognized parameter key.
        key: String,
    },
    /// The initialization policy places spikes at fixed offsets that do
    /// not fit the configured lattice.
    SpikeOutOfRange {
        /// Canonical tag of the offending policy.
        mode: &'static str,
        /// The configured cell count.
        n: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInitMode { tag } => write!(f, "unknown init_mode: '{tag}'"),
            Self::UnknownTransportMode { tag } => {
                write!(f, "unknown activator_type: '{tag}'")
            }
            Self::UnknownParameter { key } => write!(f, "unknown parameter: '{key}'"),
            Self::SpikeOutOfRange { mode, n } => {
                write!(f, "init_mode '{mode}' needs a larger grid, got {n} cells")
            }
        }
    }
}

impl Error for ConfigError {}

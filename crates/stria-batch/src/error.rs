//! Error types for sweep and grid construction.

use std::error::Error;
use std::fmt;

/// Errors detected while expanding a sweep configuration into jobs.
///
/// All of these fail fast at setup; a grid that builds successfully can
/// only fail row-by-row inside the runner.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A sweep referenced a parameter name that is not in the schema.
    UnknownParameter {
        /// The unrecognized key.
        key: String,
    },
    /// Zip mode requires every swept list to have the same length.
    ZipLengthMismatch {
        /// Expanded lengths in sweep declaration order.
        lengths: Vec<usize>,
    },
    /// A sweep-mode tag did not match `grid` or `zip`.
    UnknownMode {
        /// The unrecognized tag.
        tag: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParameter { key } => {
                write!(f, "sweep references unknown parameter '{key}'")
            }
            Self::ZipLengthMismatch { lengths } => {
                write!(f, "zip mode requires equal lengths, got {lengths:?}")
            }
            Self::UnknownMode { tag } => write!(f, "sweep mode must be 'grid' or 'zip', got '{tag}'"),
        }
    }
}

impl Error for GridError {}

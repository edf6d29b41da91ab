//! Core types for the Stria reaction-diffusion framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the simulation parameter set, the closed configuration enums, the
//! error taxonomy, and the textual field codec shared by every other
//! crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod modes;
pub mod params;

pub use error::{ConfigError, ParamError};
pub use field::{decode, encode, FieldParseError};
pub use modes::{InitMode, TransportMode};
pub use params::Params;

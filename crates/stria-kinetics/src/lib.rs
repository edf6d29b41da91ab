//! Hill kinetics and the reaction steady-state solver.
//!
//! Two layers: [`hill`] holds the pure saturating response function and
//! its closed-form gradients, validated once at construction so the
//! per-cell hot path is infallible. [`steady_state`] reduces the 2D
//! reaction fixed-point search to a 1D root problem and solves it with
//! a pipeline of escalating strategies (safeguarded Newton, bracketed
//! Brent refinement, coarse-scan rescue).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hill;
pub mod steady_state;

pub use hill::{HillResponse, Kinetics};
pub use steady_state::{
    find_steady_state, scan_steady_state, ReactionRates, RootPolicy, SteadyState, DEFAULT_MAX_NEWTON,
    DEFAULT_TOL,
};

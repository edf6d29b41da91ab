//! Stria: a 1D activator-inhibitor reaction-diffusion simulation framework.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Stria sub-crates. For most users, adding `stria` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stria::prelude::*;
//!
//! // A short membrane-tethered patterning run.
//! let params = Params {
//!     n: 51,
//!     steps: 2_000,
//!     save_every: 100,
//!     min_steps: 0,
//!     init_mode: InitMode::ActivatorSpike,
//!     activator_type: TransportMode::MembraneTethered,
//!     ..Params::default()
//! };
//!
//! let outcome = stria::sim::run(&params).unwrap();
//! assert!(outcome.steps_used <= 2_000);
//! assert_eq!(outcome.initial_activator()[25], params.spike_value);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stria-core` | Parameter set, config enums, errors, field codec |
//! | [`kinetics`] | `stria-kinetics` | Hill function, steady-state solver |
//! | [`sim`] | `stria-sim` | Field initialization, the time-stepper |
//! | [`batch`] | `stria-batch` | Sweeps, the parallel runner, report writers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Parameter set, configuration enums, and the field codec (`stria-core`).
///
/// Contains [`types::Params`], the closed [`types::InitMode`] /
/// [`types::TransportMode`] enums, the error taxonomy, and the compact
/// textual field codec used for CSV interchange.
pub use stria_core as types;

/// Hill kinetics and the steady-state solver (`stria-kinetics`).
///
/// [`kinetics::Kinetics`] evaluates the saturating response (with
/// closed-form gradients); [`kinetics::find_steady_state`] locates a
/// stable non-null fixed point of the reaction-only system.
pub use stria_kinetics as kinetics;

/// Field initialization and the time-stepper (`stria-sim`).
///
/// [`sim::run`] executes one full simulation and returns a
/// [`sim::RunOutcome`] with the sampled trajectory.
pub use stria_sim as sim;

/// Batch sweeps, the parallel runner, and reports (`stria-batch`).
///
/// Build a grid with [`batch::build_grid`], execute it with
/// [`batch::run_batch`], and write results via [`batch::report`].
pub use stria_batch as batch;

/// Common imports for typical Stria usage.
///
/// ```rust
/// use stria::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use stria_core::{ConfigError, InitMode, ParamError, Params, TransportMode};

    // Kinetics
    pub use stria_kinetics::{find_steady_state, Kinetics, ReactionRates, SteadyState};

    // Simulation
    pub use stria_sim::{run, RunOutcome, RunStatus, SimError};

    // Batch
    pub use stria_batch::{build_grid, run_batch, Job, RunRecord, SweepMode, SweepSpec};
}

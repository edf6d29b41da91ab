//! Field initialization and the diffusion-reaction time-stepper.
//!
//! [`init`] materializes the two initial concentration fields for any
//! supported [`InitMode`](stria_core::InitMode); [`stepper`] advances
//! the coupled PDE with explicit finite differences, zero-flux Neumann
//! boundaries, and convergence detection, returning the sampled
//! trajectory as a [`RunOutcome`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod init;
pub mod stepper;

pub use error::SimError;
pub use init::initialize_fields;
pub use stepper::{run, RunOutcome, RunStatus};

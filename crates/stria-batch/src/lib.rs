//! Batch orchestration: sweeps, grids, the parallel runner, and reports.
//!
//! A sweep configuration maps parameter names to [`SweepSpec`]s; the
//! grid builder expands it into independent [`Job`]s (cross-product or
//! position-aligned), the runner executes them on a worker pool with
//! per-row failure isolation, and the report module writes the results
//! table plus a constants sidecar.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod report;
pub mod runner;
pub mod sweep;

pub use error::GridError;
pub use grid::{build_grid, Job};
pub use runner::{run_batch, RowStatus, RunRecord};
pub use sweep::{SweepMode, SweepSpec};

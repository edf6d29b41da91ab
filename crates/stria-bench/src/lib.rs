//! Benchmark profiles for the Stria simulation framework.
//!
//! Pre-built parameter sets sized for timing runs:
//!
//! - [`reference_profile`]: the default 101-cell lattice, 1K steps
//! - [`stress_profile`]: 1001 cells, same physics, 10x the work per step

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stria_core::{InitMode, Params, TransportMode};

/// The reference timing profile: default lattice, short fixed budget.
///
/// Convergence checking is effectively disabled so every run does the
/// same amount of work.
pub fn reference_profile() -> Params {
    Params {
        steps: 1_000,
        save_every: 100,
        min_steps: 1_000,
        init_mode: InitMode::ActivatorSpike,
        activator_type: TransportMode::MembraneTethered,
        ..Params::default()
    }
}

/// The stress timing profile: 1001 cells.
pub fn stress_profile() -> Params {
    Params {
        n: 1_001,
        ..reference_profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_profile().validate().unwrap();
        stress_profile().validate().unwrap();
    }
}

//! Reusable scenario parameter sets.
//!
//! Four standard regimes used across the workspace tests:
//!
//! - [`baseline`] — the default cooperative patterning configuration.
//! - [`pure_diffusion`] — transport only; mass-conservation scenarios.
//! - [`pure_decay`] — first-order decay only; exponential-envelope scenarios.
//! - [`patterning`] — short-budget variant of baseline for cheap runs.

use stria_core::{InitMode, Params, TransportMode};

/// The baseline cooperative regime from the default parameter set,
/// with a budget small enough for test runs.
pub fn baseline() -> Params {
    Params {
        steps: 20_000,
        min_steps: 1_000,
        save_every: 100,
        ..Params::default()
    }
}

/// Transport only: production and decay zeroed for both species,
/// inhibitor spike at the center.
///
/// The inhibitor field should flatten monotonically while (approximately)
/// conserving total mass; the activator field stays identically zero.
pub fn pure_diffusion() -> Params {
    Params {
        act_prod_rate: 0.0,
        inh_prod_rate: 0.0,
        act_decay_rate: 0.0,
        inh_decay_rate: 0.0,
        init_mode: InitMode::InhibitorSpike,
        stopping_threshold: 1e-12,
        min_steps: 0,
        ..baseline()
    }
}

/// First-order decay only: production zeroed, activator spike at the
/// center, membrane-tethered so the spike does not spread.
///
/// The center value should follow `spike_value · exp(−λ·k·dt)` within
/// explicit-Euler discretization error.
pub fn pure_decay() -> Params {
    Params {
        act_prod_rate: 0.0,
        inh_prod_rate: 0.0,
        inh_decay_rate: 0.0,
        act_decay_rate: 1.0,
        init_mode: InitMode::ActivatorSpike,
        activator_type: TransportMode::MembraneTethered,
        stopping_threshold: 1e-12,
        min_steps: 0,
        ..baseline()
    }
}

/// A short-budget patterning run: two activator spikes near the
/// boundaries, membrane-tethered signalling.
pub fn patterning() -> Params {
    Params {
        steps: 5_000,
        min_steps: 500,
        save_every: 100,
        init_mode: InitMode::TwoActivatorSpikes,
        activator_type: TransportMode::MembraneTethered,
        ..Params::default()
    }
}

/// Sum of a field — "mass" in the conservation scenarios.
pub fn total_mass(field: &[f64]) -> f64 {
    field.iter().sum()
}

/// Peak-to-trough range of a field.
pub fn range_of(field: &[f64]) -> f64 {
    let max = field.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = field.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

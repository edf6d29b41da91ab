//! The simulation parameter set.
//!
//! [`Params`] is the single configuration value passed into every entry
//! point; there is no process-wide default state. [`Params::validate()`]
//! checks all structural invariants at setup, and [`Params::set()`]
//! provides the name-indexed assignment used by batch sweeps.

use crate::error::{ConfigError, ParamError};
use crate::modes::{InitMode, TransportMode};

/// All kinetic, numeric-scheme, and policy parameters for one run.
///
/// Immutable during a run; batch sweeps construct one value per sweep
/// point. The defaults reproduce the baseline nondimensionalized
/// parameter set (unit half-saturations and activator decay, Hill
/// coefficient 3, inhibitor diffusing 10x).
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Number of lattice cells (≥ 3).
    pub n: usize,
    /// Step budget for a run (≥ 1).
    pub steps: usize,
    /// Integration timestep (> 0).
    pub dt: f64,
    /// Lattice spacing (> 0).
    pub dx: f64,
    /// Activator half-saturation constant (> 0).
    pub act_half_sat: f64,
    /// Inhibitor half-saturation constant (> 0).
    pub inh_half_sat: f64,
    /// Activator Hill exponent.
    pub act_hill_coeff: f64,
    /// Inhibitor Hill exponent.
    pub inh_hill_coeff: f64,
    /// Basal production leakiness, shared by both species (≥ 0).
    pub basal_prod: f64,
    /// Activator production rate (≥ 0).
    pub act_prod_rate: f64,
    /// Inhibitor production rate (≥ 0).
    pub inh_prod_rate: f64,
    /// Activator decay rate (≥ 0).
    pub act_decay_rate: f64,
    /// Inhibitor decay rate (≥ 0).
    pub inh_decay_rate: f64,
    /// Activator diffusion coefficient; only used in soluble mode (≥ 0).
    pub act_diffusion: f64,
    /// Inhibitor diffusion coefficient; always applied (≥ 0).
    pub inh_diffusion: f64,
    /// Initial-condition policy.
    pub init_mode: InitMode,
    /// Activator transport mode.
    pub activator_type: TransportMode,
    /// Spike magnitude used by the spike/background/random policies, and
    /// the fallback seed level when no stable steady state is found.
    pub spike_value: f64,
    /// Snapshot (and convergence-check) interval in steps (≥ 1).
    pub save_every: usize,
    /// Average per-cell-per-field change below which the run is
    /// considered converged (> 0).
    pub stopping_threshold: f64,
    /// Steps that must elapse before convergence is ever checked.
    pub min_steps: usize,
    /// Clamp concentrations to ≥ 0 after each step. The reference
    /// stepper leaves excursions untouched; enabling this reproduces the
    /// earlier clamping variant.
    pub clamp_negative: bool,
    /// RNG seed for the random initialization policies.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n: 101,
            steps: 100_000,
            dt: 0.01,
            dx: 1.0,
            act_half_sat: 1.0,
            inh_half_sat: 1.0,
            act_hill_coeff: 3.0,
            inh_hill_coeff: 3.0,
            basal_prod: 0.0,
            act_prod_rate: 3.33,
            inh_prod_rate: 3.33,
            act_decay_rate: 1.0,
            inh_decay_rate: 1.0,
            act_diffusion: 1.0,
            inh_diffusion: 10.0,
            init_mode: InitMode::ActivatorSpike,
            activator_type: TransportMode::Soluble,
            spike_value: 5.0,
            save_every: 200,
            stopping_threshold: 1e-4,
            min_steps: 10_000,
            clamp_negative: false,
            seed: 0,
        }
    }
}

impl Params {
    /// Every numeric parameter name in the schema, in presentation order.
    ///
    /// [`set`](Self::set) and [`get`](Self::get) accept exactly these
    /// keys; report writers use the list to echo constants.
    pub const KEYS: &'static [&'static str] = &[
        "N",
        "steps",
        "dt",
        "dx",
        "act_half_sat",
        "inh_half_sat",
        "act_hill_coeff",
        "inh_hill_coeff",
        "basal_prod",
        "act_prod_rate",
        "inh_prod_rate",
        "act_decay_rate",
        "inh_decay_rate",
        "act_diffusion",
        "inh_diffusion",
        "spike_value",
        "save_every",
        "stopping_threshold",
        "min_steps",
        "seed",
    ];

    /// Validate every structural invariant of the parameter set.
    ///
    /// Called by the stepper before any work begins; batch drivers call
    /// it per sweep point so one bad combination fails as a row, not as
    /// the whole sweep.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.n < 3 {
            return Err(ParamError::GridTooSmall { n: self.n });
        }
        if self.steps == 0 {
            return Err(ParamError::NoSteps);
        }
        if self.save_every == 0 {
            return Err(ParamError::SaveEveryZero);
        }

        for (name, value) in [
            ("dt", self.dt),
            ("dx", self.dx),
            ("act_half_sat", self.act_half_sat),
            ("inh_half_sat", self.inh_half_sat),
            ("stopping_threshold", self.stopping_threshold),
        ] {
            check_finite(name, value)?;
            if value <= 0.0 {
                return Err(ParamError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("basal_prod", self.basal_prod),
            ("act_prod_rate", self.act_prod_rate),
            ("inh_prod_rate", self.inh_prod_rate),
            ("act_decay_rate", self.act_decay_rate),
            ("inh_decay_rate", self.inh_decay_rate),
            ("act_diffusion", self.act_diffusion),
            ("inh_diffusion", self.inh_diffusion),
        ] {
            check_finite(name, value)?;
            if value < 0.0 {
                return Err(ParamError::Negative { name, value });
            }
        }

        for (name, value) in [
            ("act_hill_coeff", self.act_hill_coeff),
            ("inh_hill_coeff", self.inh_hill_coeff),
            ("spike_value", self.spike_value),
        ] {
            check_finite(name, value)?;
        }

        Ok(())
    }

    /// Assign a parameter by its schema name.
    ///
    /// This is the hook batch sweeps use to vary parameters; integer
    /// parameters are rounded from the supplied real value. Unknown keys
    /// are an invalid-configuration failure.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        match key {
            "N" => self.n = value.round() as usize,
            "steps" => self.steps = value.round() as usize,
            "dt" => self.dt = value,
            "dx" => self.dx = value,
            "act_half_sat" => self.act_half_sat = value,
            "inh_half_sat" => self.inh_half_sat = value,
            "act_hill_coeff" => self.act_hill_coeff = value,
            "inh_hill_coeff" => self.inh_hill_coeff = value,
            "basal_prod" => self.basal_prod = value,
            "act_prod_rate" => self.act_prod_rate = value,
            "inh_prod_rate" => self.inh_prod_rate = value,
            "act_decay_rate" => self.act_decay_rate = value,
            "inh_decay_rate" => self.inh_decay_rate = value,
            "act_diffusion" => self.act_diffusion = value,
            "inh_diffusion" => self.inh_diffusion = value,
            "spike_value" => self.spike_value = value,
            "save_every" => self.save_every = value.round() as usize,
            "stopping_threshold" => self.stopping_threshold = value,
            "min_steps" => self.min_steps = value.round() as usize,
            "seed" => self.seed = value.round() as u64,
            other => {
                return Err(ConfigError::UnknownParameter {
                    key: other.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Read a parameter back by its schema name, for result-row echoing.
    pub fn get(&self, key: &str) -> Option<f64> {
        let v = match key {
            "N" => self.n as f64,
            "steps" => self.steps as f64,
            "dt" => self.dt,
            "dx" => self.dx,
            "act_half_sat" => self.act_half_sat,
            "inh_half_sat" => self.inh_half_sat,
            "act_hill_coeff" => self.act_hill_coeff,
            "inh_hill_coeff" => self.inh_hill_coeff,
            "basal_prod" => self.basal_prod,
            "act_prod_rate" => self.act_prod_rate,
            "inh_prod_rate" => self.inh_prod_rate,
            "act_decay_rate" => self.act_decay_rate,
            "inh_decay_rate" => self.inh_decay_rate,
            "act_diffusion" => self.act_diffusion,
            "inh_diffusion" => self.inh_diffusion,
            "spike_value" => self.spike_value,
            "save_every" => self.save_every as f64,
            "stopping_threshold" => self.stopping_threshold,
            "min_steps" => self.min_steps as f64,
            "seed" => self.seed as f64,
            _ => return None,
        };
        Some(v)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

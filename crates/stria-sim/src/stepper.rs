//! The explicit diffusion-reaction time-stepper.
//!
//! Advances the coupled activator/inhibitor PDE on a 1D lattice with
//! zero-flux Neumann boundaries. Each step reads a frozen snapshot of
//! the previous state and writes a second buffer, swapped afterwards —
//! new values never read already-updated new values. Trajectories are
//! sampled every `save_every` steps, and the same cadence drives the
//! convergence check once `min_steps` have elapsed.

use crate::error::SimError;
use crate::init::initialize_fields;
use std::mem;
use stria_core::{Params, TransportMode};
use stria_kinetics::{
    find_steady_state, Kinetics, ReactionRates, SteadyState, DEFAULT_MAX_NEWTON, DEFAULT_TOL,
};

/// How a run terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// The average per-cell-per-field change dropped below
    /// `stopping_threshold`.
    Converged,
    /// The step budget was exhausted without meeting the threshold.
    BudgetExhausted,
}

impl RunStatus {
    /// Status tag as written into result tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Converged => "converged",
            Self::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// The sampled trajectory and termination record of one run.
///
/// Histories hold the initial state, one snapshot per `save_every`
/// steps, and always end with the state of the final step taken —
/// whether that step triggered convergence or merely exhausted the
/// budget. Snapshots are independent copies; nothing aliases the
/// stepping buffers.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// How the run terminated.
    pub status: RunStatus,
    /// Number of steps actually taken.
    pub steps_used: usize,
    /// The parameter set the run was executed with.
    pub params: Params,
    /// Steady-state levels used to seed initialization, when the policy
    /// asked for them (after the degeneracy fallback, if it applied).
    pub steady_state: Option<SteadyState>,
    /// Activator snapshots, oldest first.
    pub activator_history: Vec<Vec<f64>>,
    /// Inhibitor snapshots, oldest first.
    pub inhibitor_history: Vec<Vec<f64>>,
}

impl RunOutcome {
    /// The initial activator field.
    pub fn initial_activator(&self) -> &[f64] {
        &self.activator_history[0]
    }

    /// The initial inhibitor field.
    pub fn initial_inhibitor(&self) -> &[f64] {
        &self.inhibitor_history[0]
    }

    /// The activator field after the final step.
    pub fn final_activator(&self) -> &[f64] {
        self.activator_history.last().expect("history is never empty")
    }

    /// The inhibitor field after the final step.
    pub fn final_inhibitor(&self) -> &[f64] {
        self.inhibitor_history.last().expect("history is never empty")
    }
}

/// Execute one full simulation run.
///
/// Validates the parameter set, resolves the steady-state seed when the
/// initialization policy requires one (falling back to `spike_value`
/// for both species when the solver reports degeneracy), then steps
/// until convergence or budget exhaustion.
///
/// # Errors
///
/// Invalid parameters or configuration surface before the first step;
/// the stepping loop itself cannot fail.
pub fn run(params: &Params) -> Result<RunOutcome, SimError> {
    params.validate()?;
    let kinetics = Kinetics::from_params(params)?;

    let steady_state = if params.init_mode.needs_steady_state() {
        let rates = ReactionRates::from_params(params)?;
        Some(resolve_seed(&rates, params.spike_value))
    } else {
        None
    };

    let (mut act, mut inh) = initialize_fields(params, steady_state.as_ref())?;

    let n = params.n;
    let mut act_next = act.clone();
    let mut inh_next = inh.clone();

    let mut act_hist = vec![act.clone()];
    let mut inh_hist = vec![inh.clone()];
    let mut prev_save_act = act.clone();
    let mut prev_save_inh = inh.clone();

    let mut status = RunStatus::BudgetExhausted;
    let mut steps_used = params.steps;

    for step in 0..params.steps {
        step_once(params, &kinetics, &act, &inh, &mut act_next, &mut inh_next);

        if params.clamp_negative {
            for v in act_next.iter_mut().chain(inh_next.iter_mut()) {
                if *v < 0.0 {
                    *v = 0.0;
                }
            }
        }

        mem::swap(&mut act, &mut act_next);
        mem::swap(&mut inh, &mut inh_next);

        let elapsed = step + 1;
        if elapsed % params.save_every == 0 {
            act_hist.push(act.clone());
            inh_hist.push(inh.clone());

            if elapsed > params.min_steps {
                let change: f64 = act
                    .iter()
                    .zip(&prev_save_act)
                    .chain(inh.iter().zip(&prev_save_inh))
                    .map(|(cur, prev)| (cur - prev).abs())
                    .sum();
                if change / ((2 * n) as f64) < params.stopping_threshold {
                    status = RunStatus::Converged;
                    steps_used = elapsed;
                    break;
                }
            }

            prev_save_act.copy_from_slice(&act);
            prev_save_inh.copy_from_slice(&inh);
        }
    }

    // A budget that is not a multiple of save_every ends between save
    // points; record the final state so the history always closes on it.
    if act_hist.last().map(|last| last != &act).unwrap_or(true) {
        act_hist.push(act);
        inh_hist.push(inh);
    }

    Ok(RunOutcome {
        status,
        steps_used,
        params: params.clone(),
        steady_state,
        activator_history: act_hist,
        inhibitor_history: inh_hist,
    })
}

/// Resolve the seed levels for a steady-state-derived initialization.
///
/// A NULL, non-finite, or non-positive solver result falls back to the
/// caller-supplied spike value for both species; degeneracy is absorbed
/// here and never surfaces as an error.
fn resolve_seed(rates: &ReactionRates, spike_value: f64) -> SteadyState {
    let ss = find_steady_state(rates, DEFAULT_TOL, DEFAULT_MAX_NEWTON);
    let usable = !ss.is_null()
        && ss.activator.is_finite()
        && ss.inhibitor.is_finite()
        && (ss.activator > 0.0 || ss.inhibitor > 0.0);
    if usable {
        ss
    } else {
        SteadyState {
            activator: spike_value,
            inhibitor: spike_value,
            hill: 0.0,
        }
    }
}

/// Advance both fields one step, reading only the previous snapshot.
fn step_once(
    params: &Params,
    kinetics: &Kinetics,
    act: &[f64],
    inh: &[f64],
    act_next: &mut [f64],
    inh_next: &mut [f64],
) {
    let n = act.len();
    let dt = params.dt;
    let diff_scale = dt / (params.dx * params.dx);
    let soluble = params.activator_type == TransportMode::Soluble;

    for i in 1..n - 1 {
        // Membrane-tethered activator senses its neighbours, not itself;
        // the inhibitor always senses locally.
        let act_signal = if soluble {
            act[i]
        } else {
            0.5 * (act[i - 1] + act[i + 1])
        };
        let h = kinetics.response(act_signal, inh[i]);

        let mut a_new = act[i] + dt * (params.act_prod_rate * h - params.act_decay_rate * act[i]);
        if soluble {
            a_new += params.act_diffusion * diff_scale * (act[i + 1] - 2.0 * act[i] + act[i - 1]);
        }
        act_next[i] = a_new;

        inh_next[i] = inh[i]
            + dt * (params.inh_prod_rate * h - params.inh_decay_rate * inh[i])
            + params.inh_diffusion * diff_scale * (inh[i + 1] - 2.0 * inh[i] + inh[i - 1]);
    }

    // Zero-flux boundaries: the missing neighbour reflects across the
    // edge, collapsing the Laplacian to 2·(inner − edge).
    for (idx, inner) in [(0, 1), (n - 1, n - 2)] {
        let act_signal = if soluble { act[idx] } else { act[inner] };
        let h = kinetics.response(act_signal, inh[idx]);

        let mut a_new =
            act[idx] + dt * (params.act_prod_rate * h - params.act_decay_rate * act[idx]);
        if soluble {
            a_new += params.act_diffusion * diff_scale * 2.0 * (act[inner] - act[idx]);
        }
        act_next[idx] = a_new;

        inh_next[idx] = inh[idx]
            + dt * (params.inh_prod_rate * h - params.inh_decay_rate * inh[idx])
            + params.inh_diffusion * diff_scale * 2.0 * (inh[inner] - inh[idx]);
    }
}

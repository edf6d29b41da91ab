//! Stable non-null fixed points of the reaction-only ODE system.
//!
//! The reaction system
//!
//! ```text
//! da/dt = β_a·H(a, i) − λ_a·a
//! di/dt = β_i·H(a, i) − λ_i·i
//! ```
//!
//! has fixed points at `a = A·H`, `i = I·H` with `A = β_a/λ_a`,
//! `I = β_i/λ_i`, which collapses the 2D search to a 1D root of
//! `g(H) = H(A·H, I·H) − H` over `H ∈ (basal, basal + 1)`.
//!
//! [`find_steady_state`] escalates through strategies until one produces
//! a root passing the shared stability + non-null acceptance predicate:
//!
//! 1. safeguarded Newton from an upper-biased then a lower-biased start,
//! 2. bracketed Brent-style refinement of the running sign bracket,
//! 3. a 64-point coarse scan keeping the largest qualifying root,
//! 4. a rescue scan accepting the first stable non-null candidate.
//!
//! A run that exhausts every stage returns [`SteadyState::NULL`]; callers
//! treat that as "no stable non-null fixed point" and apply their own
//! fallback level. Degeneracy is a recovered condition, never an error.

use crate::hill::Kinetics;
use smallvec::SmallVec;
use stria_core::{ParamError, Params};

/// Solver tolerance used when seeding simulations (`|g(H)| < tol`).
pub const DEFAULT_TOL: f64 = 5e-4;

/// Newton iteration cap per starting point used when seeding simulations.
pub const DEFAULT_MAX_NEWTON: usize = 12;

/// Grid resolution of the coarse scans.
const SCAN_POINTS: usize = 64;

/// Iteration cap of the bracketed refinement.
const BRENT_ITERS: usize = 50;

/// Production and decay rates together with validated Hill kinetics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReactionRates {
    /// Validated Hill parameters.
    pub kinetics: Kinetics,
    /// Activator production rate β_a.
    pub act_prod_rate: f64,
    /// Inhibitor production rate β_i.
    pub inh_prod_rate: f64,
    /// Activator decay rate λ_a.
    pub act_decay_rate: f64,
    /// Inhibitor decay rate λ_i.
    pub inh_decay_rate: f64,
}

impl ReactionRates {
    /// Extract the reaction subset of a full parameter set.
    pub fn from_params(params: &Params) -> Result<Self, ParamError> {
        Ok(Self {
            kinetics: Kinetics::from_params(params)?,
            act_prod_rate: params.act_prod_rate,
            inh_prod_rate: params.inh_prod_rate,
            act_decay_rate: params.act_decay_rate,
            inh_decay_rate: params.inh_decay_rate,
        })
    }

    /// Linear-stability test of the reaction ODE at `(a, i)`.
    ///
    /// Builds the 2×2 Jacobian from the Hill gradients,
    ///
    /// ```text
    /// J = [ β_a·∂H/∂a − λ_a    β_a·∂H/∂i      ]
    ///     [ β_i·∂H/∂a          β_i·∂H/∂i − λ_i ]
    /// ```
    ///
    /// and accepts iff both eigenvalues have strictly negative real part.
    /// For a 2×2 matrix that is exactly `trace < 0 && det > 0`
    /// (Routh–Hurwitz), so no eigenvalue extraction is needed.
    pub fn is_stable_at(&self, a: f64, i: f64) -> bool {
        let h = self.kinetics.response_with_grads(a, i);
        let j00 = self.act_prod_rate * h.d_act - self.act_decay_rate;
        let j01 = self.act_prod_rate * h.d_inh;
        let j10 = self.inh_prod_rate * h.d_act;
        let j11 = self.inh_prod_rate * h.d_inh - self.inh_decay_rate;

        let trace = j00 + j11;
        let det = j00 * j11 - j01 * j10;
        trace < 0.0 && det > 0.0
    }
}

/// A fixed point of the reaction-only system.
///
/// `hill` is the normalized response at the fixed point, in
/// `[basal, basal + 1)`. The all-zero value is the degeneracy sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteadyState {
    /// Activator level a*.
    pub activator: f64,
    /// Inhibitor level i*.
    pub inhibitor: f64,
    /// Hill response H* at the fixed point.
    pub hill: f64,
}

impl SteadyState {
    /// Sentinel for "no stable non-null fixed point found".
    pub const NULL: Self = Self {
        activator: 0.0,
        inhibitor: 0.0,
        hill: 0.0,
    };

    /// Whether this is the degeneracy sentinel.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

/// Tie-break policy when a coarse scan yields several candidate roots.
///
/// The two fallback passes deliberately differ: the in-line rescue keeps
/// the largest qualifying root, while the post-rejection pass takes the
/// first candidate passing the stability test. Both are kept explicit —
/// multi-root regimes can require either depending on caller intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootPolicy {
    /// Keep the largest root above the null threshold, stability checked
    /// afterwards by the caller.
    Largest,
    /// Keep the first root passing the stability + non-null predicate.
    FirstStable,
}

/// The reduced 1D fixed-point problem `g(H) = H(A·H, I·H) − H`.
struct Reduced {
    rates: ReactionRates,
    a_ratio: f64,
    i_ratio: f64,
    h_lo: f64,
    h_hi: f64,
}

impl Reduced {
    fn new(rates: &ReactionRates) -> Option<Self> {
        let a_ratio = rates.act_prod_rate / rates.act_decay_rate;
        let i_ratio = rates.inh_prod_rate / rates.inh_decay_rate;
        // Zero decay makes the ratio non-finite; that is numerical
        // degeneracy, resolved by the caller's fallback, not an error.
        if !a_ratio.is_finite() || !i_ratio.is_finite() {
            return None;
        }

        let basal = rates.kinetics.basal_prod();
        // Keep the bracket away from the null root when basal is zero.
        let h_lo = basal + if basal == 0.0 { 1e-9 } else { 0.0 };
        let h_hi = basal + 1.0 - 1e-9;
        Some(Self {
            rates: *rates,
            a_ratio,
            i_ratio,
            h_lo,
            h_hi,
        })
    }

    fn g(&self, h: f64) -> f64 {
        self.rates
            .kinetics
            .response(self.a_ratio * h, self.i_ratio * h)
            - h
    }

    /// `g'(H) = A·∂H/∂a + I·∂H/∂i − 1` evaluated at `(A·H, I·H)`.
    fn g_prime(&self, h: f64) -> f64 {
        let r = self
            .rates
            .kinetics
            .response_with_grads(self.a_ratio * h, self.i_ratio * h);
        self.a_ratio * r.d_act + self.i_ratio * r.d_inh - 1.0
    }

    fn candidate(&self, h: f64) -> SteadyState {
        SteadyState {
            activator: (self.a_ratio * h).max(0.0),
            inhibitor: (self.i_ratio * h).max(0.0),
            hill: h,
        }
    }

    /// Shared acceptance predicate: reaction-stable and non-null.
    fn is_admissible(&self, ss: &SteadyState) -> bool {
        self.rates.is_stable_at(ss.activator, ss.inhibitor)
            && (ss.activator > 0.0 || ss.inhibitor > 0.0)
    }
}

/// Find a stable non-null fixed point of the reaction system.
///
/// Returns [`SteadyState::NULL`] when no candidate passes the
/// stability + non-null acceptance test within the bracket. Activator
/// and inhibitor levels are rounded to the precision the tolerance
/// supports (3 decimals for `tol <= 1e-3`, else 2) so output precision
/// matches solver precision.
pub fn find_steady_state(rates: &ReactionRates, tol: f64, max_newton: usize) -> SteadyState {
    let reduced = match Reduced::new(rates) {
        Some(r) => r,
        None => return SteadyState::NULL,
    };

    let (mut h, lo, hi) = newton_stage(&reduced, tol, max_newton);

    if reduced.g(h).abs() >= tol {
        // Newton did not converge: refine on the running bracket if it
        // still straddles a sign change, otherwise on a small local
        // bracket around the estimate.
        let (glo, ghi) = (reduced.g(lo), reduced.g(hi));
        let (blo, bhi) = if glo.is_finite() && ghi.is_finite() && glo * ghi <= 0.0 {
            (lo, hi)
        } else {
            let span = (0.05 * (reduced.h_hi - reduced.h_lo)).max(1e-3);
            ((h - span).max(reduced.h_lo), (h + span).min(reduced.h_hi))
        };
        h = brent(|x| reduced.g(x), blo, bhi, tol);
    }

    if reduced.g(h).abs() >= 5.0 * tol {
        // Last resort before rejection: coarse scan, keep the largest
        // root clear of the null threshold.
        if let Some(hr) = scan_stage(&reduced, tol, RootPolicy::Largest) {
            h = hr.hill;
        }
    }

    let candidate = reduced.candidate(h);
    if reduced.is_admissible(&candidate) && reduced.g(h).abs() < 5.0 * tol {
        return rounded(&candidate, tol);
    }

    // Rejected: rescan accepting the first stable non-null root.
    if let Some(ss) = scan_stage(&reduced, tol, RootPolicy::FirstStable) {
        return rounded(&ss, tol);
    }

    SteadyState::NULL
}

/// Coarse-scan-and-refine with an explicit tie-break policy.
///
/// Exposed so the two policies stay separately testable; callers
/// normally go through [`find_steady_state`].
pub fn scan_steady_state(rates: &ReactionRates, tol: f64, policy: RootPolicy) -> SteadyState {
    Reduced::new(rates)
        .and_then(|reduced| scan_stage(&reduced, tol, policy).map(|ss| rounded(&ss, tol)))
        .unwrap_or(SteadyState::NULL)
}

/// Safeguarded Newton iteration over the reduced problem.
///
/// Tries an upper-biased start first (the upper non-null branch is
/// usually the wanted one), then a lower-biased start; each start runs
/// at most `max_newton` iterations while maintaining a sign bracket.
/// Returns the estimate together with the final bracket.
fn newton_stage(reduced: &Reduced, tol: f64, max_newton: usize) -> (f64, f64, f64) {
    let (h_lo, h_hi) = (reduced.h_lo, reduced.h_hi);
    let starts = [
        0.9 * h_hi + 0.1 * h_lo,
        0.2 * h_hi + 0.8 * h_lo,
    ];

    let mut best = (starts[0], h_lo, h_hi);

    for &h0 in &starts {
        let mut h = h0;
        let (mut lo, mut hi) = (h_lo, h_hi);

        for _ in 0..max_newton {
            let f = reduced.g(h);
            if f.abs() < tol {
                return (h, lo, hi);
            }
            let fp = reduced.g_prime(h);
            if !fp.is_finite() || fp.abs() < 1e-8 {
                // Derivative unusable: take a bisection step instead.
                h = 0.5 * (lo + hi);
            } else {
                let mut hn = h - f / fp;
                if hn <= lo || hn >= hi {
                    // Newton left the bracket: blend toward the far end.
                    hn = 0.5 * (h + if f > 0.0 { lo } else { hi });
                }
                h = hn;
            }
            // Maintain the sign bracket around the current estimate.
            let gl = reduced.g(lo);
            let gh = reduced.g(h);
            if gl.is_finite() && gh.is_finite() {
                if gl * gh <= 0.0 {
                    hi = h;
                } else {
                    lo = h;
                }
            }
        }
        best = (h, lo, hi);
    }

    best
}

/// Bracketed root refinement: inverse-secant steps safeguarded by
/// bisection, converging once the bracket half-width drops below `tol`.
///
/// Degrades gracefully on a bracket without a sign change by returning
/// its midpoint; the caller's residual check decides what to do with it.
fn brent(g: impl Fn(f64) -> f64, a0: f64, b0: f64, tol: f64) -> f64 {
    let (mut a, mut b) = (a0, b0);
    let (mut fa, mut fb) = (g(a), g(b));
    if fa == 0.0 {
        return a;
    }
    if fb == 0.0 {
        return b;
    }
    if !(fa * fb < 0.0) {
        return 0.5 * (a + b);
    }

    let (mut c, mut fc) = (a, fa);
    for _ in 0..BRENT_ITERS {
        if fb == 0.0 {
            return b;
        }
        if fa * fb > 0.0 {
            a = c;
            fa = fc;
        }
        if fa.abs() < fb.abs() {
            // Keep b as the best estimate.
            c = b;
            fc = fb;
            b = a;
            fb = fa;
            a = c;
            fa = fc;
        }

        let m = 0.5 * (a - b);
        if m.abs() < tol {
            return b;
        }

        let s = if fb - fa != 0.0 {
            b - fb * (b - a) / (fb - fa)
        } else {
            b + m
        };
        // Reject secant steps that fall outside the trusted interval.
        let quarter = (3.0 * a + b) / 4.0;
        let s = if (s < quarter && s > b) || (s > quarter && s < b) {
            b + m
        } else {
            s
        };

        let fs = g(s);
        c = a;
        fc = fa;
        a = b;
        fa = fb;
        b = s;
        fb = fs;
    }
    b
}

/// Uniform scan over the H range, refining every sign-change
/// sub-interval and applying the tie-break policy.
fn scan_stage(reduced: &Reduced, tol: f64, policy: RootPolicy) -> Option<SteadyState> {
    let basal = reduced.rates.kinetics.basal_prod();
    let null_floor = basal + 10.0 * tol;

    let mut best: Option<SteadyState> = None;
    for (lo, hi) in sign_change_intervals(reduced) {
        let h = brent(|x| reduced.g(x), lo, hi, tol);
        let ss = reduced.candidate(h);
        match policy {
            RootPolicy::Largest => {
                if h > null_floor && best.map_or(true, |b| h > b.hill) {
                    best = Some(ss);
                }
            }
            RootPolicy::FirstStable => {
                if reduced.is_admissible(&ss) {
                    return Some(ss);
                }
            }
        }
    }

    match policy {
        RootPolicy::Largest => best,
        RootPolicy::FirstStable => None,
    }
}

/// Sign-change sub-intervals of a uniform 64-point scan of `g`.
///
/// Exact zeros become a tight interval around the grid point; non-finite
/// samples are skipped rather than allowed to poison neighbours.
fn sign_change_intervals(reduced: &Reduced) -> SmallVec<[(f64, f64); 8]> {
    let (h_lo, h_hi) = (reduced.h_lo, reduced.h_hi);
    let step = (h_hi - h_lo) / (SCAN_POINTS - 1) as f64;

    let hs: Vec<f64> = (0..SCAN_POINTS).map(|k| h_lo + k as f64 * step).collect();
    let gs: Vec<f64> = hs.iter().map(|&h| reduced.g(h)).collect();

    let mut intervals = SmallVec::new();
    for k in 0..SCAN_POINTS - 1 {
        if !gs[k].is_finite() || !gs[k + 1].is_finite() {
            continue;
        }
        if gs[k] == 0.0 {
            intervals.push(((hs[k] - 1e-6).max(h_lo), (hs[k] + 1e-6).min(h_hi)));
        } else if gs[k] * gs[k + 1] < 0.0 {
            intervals.push((hs[k], hs[k + 1]));
        }
    }
    intervals
}

/// Round levels to the precision the tolerance supports.
fn rounded(ss: &SteadyState, tol: f64) -> SteadyState {
    let decimals = if tol <= 1e-3 { 3 } else { 2 };
    let scale = 10f64.powi(decimals);
    SteadyState {
        activator: (ss.activator * scale).round() / scale,
        inhibitor: (ss.inhibitor * scale).round() / scale,
        hill: ss.hill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(
        ka: f64,
        ki: f64,
        n: f64,
        m: f64,
        basal: f64,
        ba: f64,
        bi: f64,
        la: f64,
        li: f64,
    ) -> ReactionRates {
        ReactionRates {
            kinetics: Kinetics::new(ka, ki, n, m, basal).unwrap(),
            act_prod_rate: ba,
            inh_prod_rate: bi,
            act_decay_rate: la,
            inh_decay_rate: li,
        }
    }

    #[test]
    fn linear_hill_analytic_fixed_point() {
        // m = n = 1, basal = 0, unit half-sats: the non-null root solves
        // A·H + I·H = A − 1, so H* = (A − 1)/(A + I). With A = 4, I = 2:
        // H* = 0.5, a* = 2, i* = 1.
        let r = rates(1.0, 1.0, 1.0, 1.0, 0.0, 4.0, 2.0, 1.0, 1.0);
        let ss = find_steady_state(&r, 1e-4, 12);

        assert!(!ss.is_null());
        assert!((ss.activator - 2.0).abs() < 1e-3, "a* = {}", ss.activator);
        assert!((ss.inhibitor - 1.0).abs() < 1e-3, "i* = {}", ss.inhibitor);
        assert!((ss.hill - 0.5).abs() < 1e-3, "H* = {}", ss.hill);
    }

    #[test]
    fn fixed_point_satisfies_defining_equations() {
        let r = rates(1.0, 1.0, 1.0, 1.0, 0.0, 4.0, 2.0, 1.0, 1.0);
        let tol = 1e-4;
        let ss = find_steady_state(&r, tol, 12);
        assert!(!ss.is_null());

        // a* = A·H(a*, i*) and i* = I·H(a*, i*), up to solver rounding.
        let h = r.kinetics.response(ss.activator, ss.inhibitor);
        let a_ratio = r.act_prod_rate / r.act_decay_rate;
        let i_ratio = r.inh_prod_rate / r.inh_decay_rate;
        assert!((ss.activator - a_ratio * h).abs() < 5e-3);
        assert!((ss.inhibitor - i_ratio * h).abs() < 5e-3);
    }

    #[test]
    fn returned_point_is_reaction_stable() {
        let r = rates(1.0, 1.0, 1.0, 1.0, 0.0, 4.0, 2.0, 1.0, 1.0);
        let ss = find_steady_state(&r, 1e-4, 12);
        assert!(!ss.is_null());
        assert!(r.is_stable_at(ss.activator, ss.inhibitor));
    }

    #[test]
    fn baseline_cooperative_regime_has_upper_branch() {
        // The default parameter set (Hill coefficient 3, β/λ = 3.33 for
        // both species) is bistable in the reduced problem: a middle
        // branch near H ≈ 0.22 and an upper branch near H ≈ 0.43. The
        // solver should land on the stable upper branch.
        let r = rates(1.0, 1.0, 3.0, 3.0, 0.0, 3.33, 3.33, 1.0, 1.0);
        let ss = find_steady_state(&r, DEFAULT_TOL, DEFAULT_MAX_NEWTON);

        assert!(!ss.is_null());
        assert!(ss.hill > 0.35, "expected upper branch, got H = {}", ss.hill);
        // A = I, so both species settle at the same level.
        assert!((ss.activator - ss.inhibitor).abs() < 1e-9);
        assert!(r.is_stable_at(ss.activator, ss.inhibitor));
    }

    #[test]
    fn no_production_degenerates_to_null() {
        let r = rates(1.0, 1.0, 3.0, 3.0, 0.0, 0.0, 0.0, 1.0, 1.0);
        let ss = find_steady_state(&r, 5e-4, 12);
        assert!(ss.is_null());
    }

    #[test]
    fn zero_decay_degenerates_to_null() {
        // β/λ is non-finite; the solver must refuse quietly, not panic.
        let r = rates(1.0, 1.0, 3.0, 3.0, 0.0, 3.33, 3.33, 0.0, 1.0);
        let ss = find_steady_state(&r, 5e-4, 12);
        assert!(ss.is_null());
    }

    #[test]
    fn rounding_matches_tolerance() {
        let r = rates(1.0, 1.0, 1.0, 1.0, 0.0, 4.0, 2.0, 1.0, 1.0);

        let fine = find_steady_state(&r, 1e-4, 12);
        let scaled = fine.activator * 1e3;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "3-decimal rounding expected, got {}",
            fine.activator
        );

        let coarse = find_steady_state(&r, 1e-2, 12);
        let scaled = coarse.activator * 1e2;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "2-decimal rounding expected, got {}",
            coarse.activator
        );
    }

    #[test]
    fn scan_policies_agree_on_single_root_regime() {
        let r = rates(1.0, 1.0, 1.0, 1.0, 0.0, 4.0, 2.0, 1.0, 1.0);
        let largest = scan_steady_state(&r, 1e-4, RootPolicy::Largest);
        let first = scan_steady_state(&r, 1e-4, RootPolicy::FirstStable);
        assert!(!largest.is_null());
        assert!(!first.is_null());
        assert!((largest.hill - first.hill).abs() < 1e-3);
    }

    #[test]
    fn scan_policies_differ_on_multi_root_regime() {
        // Cooperative bistable regime: two non-null roots. Largest keeps
        // the upper branch regardless of stability ordering; FirstStable
        // walks the scan in H order and stops at the first stable one.
        let r = rates(1.0, 1.0, 3.0, 3.0, 0.0, 3.33, 3.33, 1.0, 1.0);
        let largest = scan_steady_state(&r, DEFAULT_TOL, RootPolicy::Largest);
        assert!(!largest.is_null());
        assert!(largest.hill > 0.35);

        let first = scan_steady_state(&r, DEFAULT_TOL, RootPolicy::FirstStable);
        assert!(!first.is_null());
        assert!(r.is_stable_at(first.activator, first.inhibitor));
    }

    #[test]
    fn basal_leak_lifts_null_state() {
        // With a basal leak the H bracket starts at basal, and a root
        // exists even without cooperative activation.
        let r = rates(1.0, 1.0, 2.0, 2.0, 0.1, 2.0, 2.0, 1.0, 1.0);
        let ss = find_steady_state(&r, 5e-4, 12);
        assert!(!ss.is_null());
        assert!(ss.hill > 0.1 - 1e-9);
        assert!(ss.activator > 0.0);
    }
}

//! The saturating Hill activation/repression function.
//!
//! Activation by the activator signal, repression by the inhibitor
//! signal, with a shared basal leak:
//!
//! ```text
//! H(a, i) = (basal + (a/ka)^n) / (1 + basal + (a/ka)^n + (i/ki)^m)
//! ```
//!
//! Signals at or below zero contribute nothing — concentrations are
//! physical and cannot be negative, but explicit-Euler integration can
//! produce small negative excursions, so the powers are clamped rather
//! than left to produce NaN.

use stria_core::{ParamError, Params};

/// Validated Hill parameters.
///
/// Construction rejects non-positive half-saturation constants and
/// non-finite members, so [`response`](Kinetics::response) and
/// [`response_with_grads`](Kinetics::response_with_grads) never fail on
/// the per-cell hot path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinetics {
    act_half_sat: f64,
    inh_half_sat: f64,
    act_hill_coeff: f64,
    inh_hill_coeff: f64,
    basal_prod: f64,
}

/// Hill value with its partial derivatives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HillResponse {
    /// The response `H(a, i)`.
    pub value: f64,
    /// `∂H/∂a` at the evaluation point.
    pub d_act: f64,
    /// `∂H/∂i` at the evaluation point.
    pub d_inh: f64,
}

impl Kinetics {
    /// Build a validated kinetics value.
    ///
    /// # Errors
    ///
    /// `ka <= 0` or `ki <= 0` is an invalid-parameter failure, as is any
    /// non-finite member or `basal < 0`.
    pub fn new(
        act_half_sat: f64,
        inh_half_sat: f64,
        act_hill_coeff: f64,
        inh_hill_coeff: f64,
        basal_prod: f64,
    ) -> Result<Self, ParamError> {
        for (name, value) in [
            ("act_half_sat", act_half_sat),
            ("inh_half_sat", inh_half_sat),
            ("act_hill_coeff", act_hill_coeff),
            ("inh_hill_coeff", inh_hill_coeff),
            ("basal_prod", basal_prod),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
        }
        if act_half_sat <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "act_half_sat",
                value: act_half_sat,
            });
        }
        if inh_half_sat <= 0.0 {
            return Err(ParamError::NonPositive {
                name: "inh_half_sat",
                value: inh_half_sat,
            });
        }
        if basal_prod < 0.0 {
            return Err(ParamError::Negative {
                name: "basal_prod",
                value: basal_prod,
            });
        }
        Ok(Self {
            act_half_sat,
            inh_half_sat,
            act_hill_coeff,
            inh_hill_coeff,
            basal_prod,
        })
    }

    /// Extract the kinetic subset of a full parameter set.
    pub fn from_params(params: &Params) -> Result<Self, ParamError> {
        Self::new(
            params.act_half_sat,
            params.inh_half_sat,
            params.act_hill_coeff,
            params.inh_hill_coeff,
            params.basal_prod,
        )
    }

    /// Basal production leak.
    pub fn basal_prod(&self) -> f64 {
        self.basal_prod
    }

    /// Normalized activator power `(a/ka)^n`, zero for `a <= 0`.
    fn act_term(&self, a: f64) -> f64 {
        if a > 0.0 {
            (a / self.act_half_sat).powf(self.act_hill_coeff)
        } else {
            0.0
        }
    }

    /// Normalized inhibitor power `(i/ki)^m`, zero for `i <= 0`.
    fn inh_term(&self, i: f64) -> f64 {
        if i > 0.0 {
            (i / self.inh_half_sat).powf(self.inh_hill_coeff)
        } else {
            0.0
        }
    }

    /// Evaluate `H(a, i)`.
    pub fn response(&self, act_signal: f64, inh_signal: f64) -> f64 {
        let aa = self.act_term(act_signal);
        let ii = self.inh_term(inh_signal);
        (self.basal_prod + aa) / (1.0 + self.basal_prod + aa + ii)
    }

    /// Evaluate `H(a, i)` together with `∂H/∂a` and `∂H/∂i`.
    ///
    /// Quotient rule on the substitution `aa = (a/ka)^n`, `ii = (i/ki)^m`
    /// with numerator `basal + aa` and denominator `1 + basal + aa + ii`:
    ///
    /// ```text
    /// ∂H/∂aa = (denom − (basal + aa)) / denom²
    /// ∂H/∂ii = −(basal + aa) / denom²
    /// ∂aa/∂a = n·aa/a  (0 for a ≤ 0),   ∂ii/∂i = m·ii/i  (0 for i ≤ 0)
    /// ```
    pub fn response_with_grads(&self, act_signal: f64, inh_signal: f64) -> HillResponse {
        let aa = self.act_term(act_signal);
        let ii = self.inh_term(inh_signal);

        let num = self.basal_prod + aa;
        let denom = 1.0 + self.basal_prod + aa + ii;
        let value = num / denom;

        let d_aa = if act_signal > 0.0 {
            self.act_hill_coeff * aa / act_signal
        } else {
            0.0
        };
        let d_ii = if inh_signal > 0.0 {
            self.inh_hill_coeff * ii / inh_signal
        } else {
            0.0
        };

        let inv_denom2 = 1.0 / (denom * denom);
        let dh_daa = (denom - num) * inv_denom2;
        let dh_dii = -num * inv_denom2;

        HillResponse {
            value,
            d_act: dh_daa * d_aa,
            d_inh: dh_dii * d_ii,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kin(basal: f64) -> Kinetics {
        Kinetics::new(1.0, 1.0, 3.0, 3.0, basal).unwrap()
    }

    #[test]
    fn rejects_bad_half_sats() {
        assert!(matches!(
            Kinetics::new(0.0, 1.0, 1.0, 1.0, 0.0),
            Err(ParamError::NonPositive {
                name: "act_half_sat",
                ..
            })
        ));
        assert!(matches!(
            Kinetics::new(1.0, -2.0, 1.0, 1.0, 0.0),
            Err(ParamError::NonPositive {
                name: "inh_half_sat",
                ..
            })
        ));
        assert!(Kinetics::new(1.0, 1.0, 1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn zero_signals_give_basal_floor() {
        // At a = 0: H = basal / (1 + basal + ii); at a = i = 0:
        // H = basal / (1 + basal).
        let k = kin(0.5);
        assert!((k.response(0.0, 0.0) - 0.5 / 1.5).abs() < 1e-12);

        let ii = 2.0f64.powi(3); // (2/1)^3
        assert!((k.response(0.0, 2.0) - 0.5 / (1.5 + ii)).abs() < 1e-12);

        let k0 = kin(0.0);
        assert_eq!(k0.response(0.0, 0.0), 0.0);
    }

    #[test]
    fn negative_signals_clamp_to_zero_term() {
        let k = kin(0.0);
        assert_eq!(k.response(-1.0, -1.0), k.response(0.0, 0.0));
        let g = k.response_with_grads(-1.0, -1.0);
        assert_eq!(g.d_act, 0.0);
        assert_eq!(g.d_inh, 0.0);
    }

    #[test]
    fn gradients_match_central_differences() {
        let k = kin(0.2);
        let eps = 1e-6;
        for &(a, i) in &[(0.5, 0.5), (1.0, 2.0), (3.0, 0.1), (0.01, 5.0)] {
            let g = k.response_with_grads(a, i);
            let num_da = (k.response(a + eps, i) - k.response(a - eps, i)) / (2.0 * eps);
            let num_di = (k.response(a, i + eps) - k.response(a, i - eps)) / (2.0 * eps);
            assert!(
                (g.d_act - num_da).abs() < 1e-5,
                "d_act mismatch at ({a}, {i}): analytic {} numeric {num_da}",
                g.d_act
            );
            assert!(
                (g.d_inh - num_di).abs() < 1e-5,
                "d_inh mismatch at ({a}, {i}): analytic {} numeric {num_di}",
                g.d_inh
            );
        }
    }

    proptest! {
        #[test]
        fn response_is_bounded(
            a in 0.0f64..100.0,
            i in 0.0f64..100.0,
            basal in 0.0f64..2.0,
        ) {
            let k = kin(basal);
            let h = k.response(a, i);
            prop_assert!(h >= 0.0, "H must be non-negative, got {h}");
            prop_assert!(h < 1.0 + basal, "H must stay below 1 + basal, got {h}");
        }

        #[test]
        fn monotone_in_activator(
            a in 0.01f64..50.0,
            i in 0.0f64..50.0,
            basal in 0.0f64..1.0,
        ) {
            let k = kin(basal);
            prop_assert!(k.response(a * 1.1, i) >= k.response(a, i));
            prop_assert!(k.response_with_grads(a, i).d_act >= 0.0);
        }

        #[test]
        fn monotone_in_inhibitor(
            a in 0.01f64..50.0,
            i in 0.01f64..50.0,
            basal in 0.0f64..1.0,
        ) {
            let k = kin(basal);
            prop_assert!(k.response(a, i * 1.1) <= k.response(a, i));
            prop_assert!(k.response_with_grads(a, i).d_inh <= 0.0);
        }
    }
}

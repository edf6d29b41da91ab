//! Initial-condition construction for the two concentration fields.
//!
//! Every policy materializes two equal-length `Vec<f64>` fields. The
//! random policies draw from a ChaCha8 RNG seeded from `Params::seed`,
//! so identical configurations produce identical initial fields.

use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stria_core::{ConfigError, InitMode, Params};
use stria_kinetics::SteadyState;

/// Offset of the left spike in the two-spike layout.
const TWO_SPIKE_LEFT: usize = 5;
/// Offset of the right spike from the end of the lattice.
const TWO_SPIKE_RIGHT_FROM_END: usize = 15;

/// Relative half-width of the tight random band around a steady state.
const TIGHT_BAND: f64 = 0.05;

/// Build the initial activator and inhibitor fields for a run.
///
/// `seed_state` carries the steady-state levels for the policies that
/// need them ([`InitMode::needs_steady_state`]); when absent for such a
/// policy, `spike_value` stands in for both species, mirroring the
/// stepper's degeneracy fallback.
///
/// # Errors
///
/// [`ConfigError::SpikeOutOfRange`] when the two-spike layout does not
/// fit the configured lattice.
pub fn initialize_fields(
    params: &Params,
    seed_state: Option<&SteadyState>,
) -> Result<(Vec<f64>, Vec<f64>), ConfigError> {
    let n = params.n;
    let spike = params.spike_value;
    let center = n / 2;

    let mut activator = vec![0.0; n];
    let mut inhibitor = vec![0.0; n];

    let (seed_act, seed_inh) = match seed_state {
        Some(ss) => (ss.activator, ss.inhibitor),
        None => (spike, spike),
    };

    match params.init_mode {
        InitMode::ActivatorSpike => {
            activator[center] = spike;
        }
        InitMode::InhibitorSpike => {
            inhibitor[center] = spike;
        }
        InitMode::BothSpikes => {
            activator[center] = spike;
            inhibitor[center] = spike;
        }
        InitMode::TwoActivatorSpikes => {
            if n < TWO_SPIKE_RIGHT_FROM_END + 1 {
                return Err(ConfigError::SpikeOutOfRange {
                    mode: params.init_mode.as_str(),
                    n,
                });
            }
            activator[TWO_SPIKE_LEFT] = spike;
            activator[n - TWO_SPIKE_RIGHT_FROM_END] = spike;
        }
        InitMode::ActivatorSpikeWithBackground => {
            activator.fill(spike / 10.0);
            activator[center] = spike;
        }
        InitMode::ActivatorOn => {
            activator.fill(spike);
        }
        InitMode::InhibitorOn => {
            inhibitor.fill(spike);
        }
        InitMode::BothOn => {
            activator.fill(spike);
            inhibitor.fill(spike);
        }
        InitMode::AllOff => {}
        InitMode::UniformRandom => {
            let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
            for v in activator.iter_mut() {
                *v = rng.random::<f64>() * spike;
            }
            for v in inhibitor.iter_mut() {
                *v = rng.random::<f64>() * spike;
            }
        }
        InitMode::RandomTight => {
            let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
            for v in activator.iter_mut() {
                *v = seed_act * (1.0 + TIGHT_BAND * (2.0 * rng.random::<f64>() - 1.0));
            }
            for v in inhibitor.iter_mut() {
                *v = seed_inh * (1.0 + TIGHT_BAND * (2.0 * rng.random::<f64>() - 1.0));
            }
        }
        InitMode::ActivatorSpikeSteadyState => {
            activator[center] = seed_act;
        }
        InitMode::PeakSteadyState => {
            activator[center] = seed_act;
            inhibitor[center] = seed_inh;
        }
    }

    Ok((activator, inhibitor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mode: InitMode) -> Params {
        Params {
            n: 101,
            init_mode: mode,
            spike_value: 5.0,
            ..Params::default()
        }
    }

    fn total(field: &[f64]) -> f64 {
        field.iter().sum()
    }

    #[test]
    fn single_spikes_land_on_center() {
        let (a, r) = initialize_fields(&params(InitMode::ActivatorSpike), None).unwrap();
        assert_eq!(a[50], 5.0);
        assert_eq!(total(&a), 5.0);
        assert_eq!(total(&r), 0.0);

        let (a, r) = initialize_fields(&params(InitMode::InhibitorSpike), None).unwrap();
        assert_eq!(r[50], 5.0);
        assert_eq!(total(&a), 0.0);

        let (a, r) = initialize_fields(&params(InitMode::BothSpikes), None).unwrap();
        assert_eq!(a[50], 5.0);
        assert_eq!(r[50], 5.0);
    }

    #[test]
    fn two_spikes_sit_near_each_boundary() {
        let (a, _) = initialize_fields(&params(InitMode::TwoActivatorSpikes), None).unwrap();
        assert_eq!(a[5], 5.0);
        assert_eq!(a[86], 5.0);
        assert_eq!(total(&a), 10.0);
    }

    #[test]
    fn two_spikes_reject_short_lattice() {
        let p = Params {
            n: 12,
            ..params(InitMode::TwoActivatorSpikes)
        };
        let err = initialize_fields(&p, None).unwrap_err();
        assert!(matches!(err, ConfigError::SpikeOutOfRange { n: 12, .. }));
    }

    #[test]
    fn background_variant_elevates_center() {
        let (a, r) =
            initialize_fields(&params(InitMode::ActivatorSpikeWithBackground), None).unwrap();
        assert_eq!(a[50], 5.0);
        assert_eq!(a[0], 0.5);
        assert_eq!(a[100], 0.5);
        assert_eq!(total(&r), 0.0);
    }

    #[test]
    fn flat_variants() {
        let (a, r) = initialize_fields(&params(InitMode::BothOn), None).unwrap();
        assert!(a.iter().all(|&v| v == 5.0));
        assert!(r.iter().all(|&v| v == 5.0));

        let (a, r) = initialize_fields(&params(InitMode::AllOff), None).unwrap();
        assert!(a.iter().all(|&v| v == 0.0));
        assert!(r.iter().all(|&v| v == 0.0));

        let (a, r) = initialize_fields(&params(InitMode::ActivatorOn), None).unwrap();
        assert!(a.iter().all(|&v| v == 5.0));
        assert!(r.iter().all(|&v| v == 0.0));

        let (a, r) = initialize_fields(&params(InitMode::InhibitorOn), None).unwrap();
        assert!(a.iter().all(|&v| v == 0.0));
        assert!(r.iter().all(|&v| v == 5.0));
    }

    #[test]
    fn uniform_random_is_bounded_and_deterministic() {
        let p = params(InitMode::UniformRandom);
        let (a1, r1) = initialize_fields(&p, None).unwrap();
        let (a2, r2) = initialize_fields(&p, None).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(r1, r2);
        assert!(a1.iter().chain(r1.iter()).all(|&v| (0.0..=5.0).contains(&v)));

        let reseeded = Params { seed: 7, ..p };
        let (a3, _) = initialize_fields(&reseeded, None).unwrap();
        assert_ne!(a1, a3, "different seeds should give different noise");
    }

    #[test]
    fn random_tight_stays_within_band() {
        let ss = SteadyState {
            activator: 2.0,
            inhibitor: 1.0,
            hill: 0.5,
        };
        let (a, r) = initialize_fields(&params(InitMode::RandomTight), Some(&ss)).unwrap();
        assert!(a.iter().all(|&v| (1.9..=2.1).contains(&v)));
        assert!(r.iter().all(|&v| (0.95..=1.05).contains(&v)));
    }

    #[test]
    fn steady_state_spikes_use_seed_levels() {
        let ss = SteadyState {
            activator: 1.415,
            inhibitor: 1.415,
            hill: 0.425,
        };
        let (a, r) =
            initialize_fields(&params(InitMode::ActivatorSpikeSteadyState), Some(&ss)).unwrap();
        assert_eq!(a[50], 1.415);
        assert_eq!(total(&r), 0.0);

        let (a, r) = initialize_fields(&params(InitMode::PeakSteadyState), Some(&ss)).unwrap();
        assert_eq!(a[50], 1.415);
        assert_eq!(r[50], 1.415);
    }

    #[test]
    fn missing_seed_state_falls_back_to_spike_value() {
        let (a, r) = initialize_fields(&params(InitMode::PeakSteadyState), None).unwrap();
        assert_eq!(a[50], 5.0);
        assert_eq!(r[50], 5.0);
    }
}

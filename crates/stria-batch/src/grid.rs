//! Expanding a sweep configuration into concrete jobs.

use crate::error::GridError;
use crate::sweep::{SweepMode, SweepSpec};
use indexmap::IndexMap;
use stria_core::{ConfigError, Params};

/// One unit of batch work: a fully-resolved parameter set plus the
/// swept values that distinguish it.
///
/// The varied pairs carry row identity in the results table, so
/// collection order never matters.
#[derive(Clone, Debug)]
pub struct Job {
    /// The parameter set for this run.
    pub params: Params,
    /// `(key, value)` for every swept parameter, in sweep declaration
    /// order.
    pub varied: Vec<(String, f64)>,
}

/// Expand a sweep configuration over a base parameter set.
///
/// The sweep map is insertion-ordered; that order fixes both the
/// odometer nesting in [`SweepMode::Grid`] (last key varies fastest)
/// and the column order in reports. An empty map yields the base alone.
///
/// # Errors
///
/// Unknown parameter names and zip length mismatches fail here, before
/// any simulation starts.
pub fn build_grid(
    base: &Params,
    sweeps: &IndexMap<String, SweepSpec>,
    mode: SweepMode,
) -> Result<Vec<Job>, GridError> {
    if sweeps.is_empty() {
        return Ok(vec![Job {
            params: base.clone(),
            varied: Vec::new(),
        }]);
    }

    let keys: Vec<&str> = sweeps.keys().map(String::as_str).collect();
    let values: Vec<Vec<f64>> = sweeps.values().map(SweepSpec::expand).collect();

    // Surface bad keys before building anything.
    for key in &keys {
        let mut probe = base.clone();
        if let Err(ConfigError::UnknownParameter { key }) = probe.set(key, 0.0) {
            return Err(GridError::UnknownParameter { key });
        }
    }

    let mut jobs = Vec::new();
    match mode {
        SweepMode::Grid => {
            let total: usize = values.iter().map(Vec::len).product();
            let mut indices = vec![0usize; keys.len()];
            for _ in 0..total {
                jobs.push(make_job(base, &keys, &values, &indices));
                // Odometer increment, last key fastest.
                for slot in (0..indices.len()).rev() {
                    indices[slot] += 1;
                    if indices[slot] < values[slot].len() {
                        break;
                    }
                    indices[slot] = 0;
                }
            }
        }
        SweepMode::Zip => {
            let lengths: Vec<usize> = values.iter().map(Vec::len).collect();
            if lengths.windows(2).any(|w| w[0] != w[1]) {
                return Err(GridError::ZipLengthMismatch { lengths });
            }
            for k in 0..lengths[0] {
                let indices = vec![k; keys.len()];
                jobs.push(make_job(base, &keys, &values, &indices));
            }
        }
    }

    Ok(jobs)
}

fn make_job(base: &Params, keys: &[&str], values: &[Vec<f64>], indices: &[usize]) -> Job {
    let mut params = base.clone();
    let mut varied = Vec::with_capacity(keys.len());
    for ((key, vals), &idx) in keys.iter().zip(values).zip(indices) {
        let v = vals[idx];
        // Keys were probed above; set cannot fail here.
        let _ = params.set(key, v);
        varied.push((key.to_string(), v));
    }
    Job { params, varied }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweeps(entries: &[(&str, SweepSpec)]) -> IndexMap<String, SweepSpec> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_sweep_yields_base() {
        let jobs = build_grid(&Params::default(), &IndexMap::new(), SweepMode::Grid).unwrap();
        assert_eq!(jobs.len(), 1);
        assert!(jobs[0].varied.is_empty());
        assert_eq!(jobs[0].params, Params::default());
    }

    #[test]
    fn grid_is_full_cross_product() {
        let s = sweeps(&[
            ("act_prod_rate", SweepSpec::Values(vec![1.0, 2.0, 3.0])),
            ("inh_prod_rate", SweepSpec::Values(vec![5.0, 6.0])),
        ]);
        let jobs = build_grid(&Params::default(), &s, SweepMode::Grid).unwrap();
        assert_eq!(jobs.len(), 6);

        // Last key varies fastest.
        assert_eq!(jobs[0].varied, vec![
            ("act_prod_rate".to_string(), 1.0),
            ("inh_prod_rate".to_string(), 5.0),
        ]);
        assert_eq!(jobs[1].varied[1].1, 6.0);
        assert_eq!(jobs[2].varied[0].1, 2.0);

        // Values actually landed in the parameter sets.
        assert_eq!(jobs[5].params.act_prod_rate, 3.0);
        assert_eq!(jobs[5].params.inh_prod_rate, 6.0);
    }

    #[test]
    fn zip_aligns_positions() {
        let s = sweeps(&[
            ("act_prod_rate", SweepSpec::Values(vec![1.0, 2.0])),
            ("inh_prod_rate", SweepSpec::Values(vec![5.0, 6.0])),
        ]);
        let jobs = build_grid(&Params::default(), &s, SweepMode::Zip).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].params.act_prod_rate, 2.0);
        assert_eq!(jobs[1].params.inh_prod_rate, 6.0);
    }

    #[test]
    fn zip_rejects_mismatched_lengths() {
        let s = sweeps(&[
            ("act_prod_rate", SweepSpec::Values(vec![1.0, 2.0])),
            ("inh_prod_rate", SweepSpec::Values(vec![5.0])),
        ]);
        let err = build_grid(&Params::default(), &s, SweepMode::Zip).unwrap_err();
        assert_eq!(
            err,
            GridError::ZipLengthMismatch {
                lengths: vec![2, 1]
            }
        );
    }

    #[test]
    fn unknown_key_rejected_up_front() {
        let s = sweeps(&[("inh_production", SweepSpec::Values(vec![1.0]))]);
        let err = build_grid(&Params::default(), &s, SweepMode::Grid).unwrap_err();
        assert!(matches!(err, GridError::UnknownParameter { .. }));
    }

    #[test]
    fn integer_parameters_sweep_cleanly() {
        let s = sweeps(&[(
            "N",
            SweepSpec::Linear {
                start: 51.0,
                stop: 101.0,
                count: 2,
            },
        )]);
        let jobs = build_grid(&Params::default(), &s, SweepMode::Grid).unwrap();
        assert_eq!(jobs[0].params.n, 51);
        assert_eq!(jobs[1].params.n, 101);
    }
}

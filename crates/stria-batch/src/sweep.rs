//! Sweep specifications: how one parameter varies across a batch.
//!
//! Mirrors the accepted configuration forms: an explicit value list, an
//! inclusive linear range, a base-10 logarithmic range, or a
//! concatenation of any of these.

use crate::error::GridError;
use std::str::FromStr;

/// How a single parameter varies across a sweep.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepSpec {
    /// Explicit values, used verbatim.
    Values(Vec<f64>),
    /// `count` evenly spaced values from `start` to `stop` inclusive.
    Linear {
        /// First value.
        start: f64,
        /// Last value (included when `count > 1`).
        stop: f64,
        /// Number of samples.
        count: usize,
    },
    /// `count` values from `10^start_exp` to `10^stop_exp`, evenly
    /// spaced in exponent.
    Log {
        /// First exponent.
        start_exp: f64,
        /// Last exponent (included when `count > 1`).
        stop_exp: f64,
        /// Number of samples.
        count: usize,
    },
    /// Segments expanded in order and concatenated.
    Concat(Vec<SweepSpec>),
}

impl SweepSpec {
    /// Materialize the concrete values of this spec.
    pub fn expand(&self) -> Vec<f64> {
        match self {
            Self::Values(vs) => vs.clone(),
            Self::Linear { start, stop, count } => linspace(*start, *stop, *count),
            Self::Log {
                start_exp,
                stop_exp,
                count,
            } => linspace(*start_exp, *stop_exp, *count)
                .into_iter()
                .map(|e| 10f64.powf(e))
                .collect(),
            Self::Concat(segments) => segments.iter().flat_map(|s| s.expand()).collect(),
        }
    }
}

/// `count` evenly spaced samples over `[start, stop]`.
///
/// `count == 1` yields `[start]`; `count == 0` yields nothing.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|k| start + k as f64 * step).collect()
        }
    }
}

/// How swept parameters combine into jobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepMode {
    /// Full cross-product: every combination of every swept value.
    Grid,
    /// Position-aligned: the k-th value of every sweep forms job k;
    /// all sweeps must expand to the same length.
    Zip,
}

impl FromStr for SweepMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "zip" => Ok(Self::Zip),
            other => Err(GridError::UnknownMode {
                tag: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_includes_both_endpoints() {
        let vs = SweepSpec::Linear {
            start: 1.0,
            stop: 3.0,
            count: 5,
        }
        .expand();
        assert_eq!(vs, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn linear_degenerate_counts() {
        assert!(SweepSpec::Linear {
            start: 1.0,
            stop: 2.0,
            count: 0
        }
        .expand()
        .is_empty());
        assert_eq!(
            SweepSpec::Linear {
                start: 1.0,
                stop: 2.0,
                count: 1
            }
            .expand(),
            vec![1.0]
        );
    }

    #[test]
    fn log_spans_decades() {
        let vs = SweepSpec::Log {
            start_exp: -2.0,
            stop_exp: 1.0,
            count: 4,
        }
        .expand();
        assert_eq!(vs.len(), 4);
        assert!((vs[0] - 0.01).abs() < 1e-12);
        assert!((vs[1] - 0.1).abs() < 1e-12);
        assert!((vs[2] - 1.0).abs() < 1e-12);
        assert!((vs[3] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn concat_preserves_segment_order() {
        let vs = SweepSpec::Concat(vec![
            SweepSpec::Values(vec![0.5]),
            SweepSpec::Linear {
                start: 1.0,
                stop: 2.0,
                count: 3,
            },
        ])
        .expand();
        assert_eq!(vs, vec![0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn mode_tags_parse() {
        assert_eq!("grid".parse::<SweepMode>().unwrap(), SweepMode::Grid);
        assert_eq!("zip".parse::<SweepMode>().unwrap(), SweepMode::Zip);
        assert!(matches!(
            "cartesian".parse::<SweepMode>(),
            Err(GridError::UnknownMode { .. })
        ));
    }
}

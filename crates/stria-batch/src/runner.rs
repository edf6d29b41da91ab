//! The parallel batch runner.
//!
//! Jobs are independent: each worker owns its parameter set and emits a
//! self-contained [`RunRecord`] through a channel. Nothing is shared
//! between concurrent runs, so no locking is needed; records carry
//! their job index and are re-sorted after collection. A failing
//! parameter set becomes a failed row, never a failed sweep.

use crate::grid::Job;
use crossbeam_channel::unbounded;
use std::thread;
use stria_kinetics::SteadyState;
use stria_sim::{run, RunStatus};

/// Termination tag of one batch row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowStatus {
    /// The run converged before its budget.
    Converged,
    /// The run used its whole step budget.
    BudgetExhausted,
    /// Setup failed; the row records the reason and NaN statistics.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

impl RowStatus {
    /// Status tag as written into result tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Converged => "converged",
            Self::BudgetExhausted => "budget_exhausted",
            Self::Failed { .. } => "failed",
        }
    }
}

impl From<RunStatus> for RowStatus {
    fn from(s: RunStatus) -> Self {
        match s {
            RunStatus::Converged => Self::Converged,
            RunStatus::BudgetExhausted => Self::BudgetExhausted,
        }
    }
}

/// One row of the batch results table.
#[derive(Clone, Debug)]
pub struct RunRecord {
    /// Index of the job in the expanded grid.
    pub index: usize,
    /// Swept `(key, value)` pairs identifying this row.
    pub varied: Vec<(String, f64)>,
    /// How the run (or its setup) terminated.
    pub status: RowStatus,
    /// Steps actually taken; zero for failed rows.
    pub steps_used: usize,
    /// Peak-to-trough amplitude of the final activator field; NaN for
    /// failed rows.
    pub activator_amplitude: f64,
    /// Peak-to-trough amplitude of the final inhibitor field; NaN for
    /// failed rows.
    pub inhibitor_amplitude: f64,
    /// Steady-state seed levels, when the initialization policy used them.
    pub steady_state: Option<SteadyState>,
    /// Initial activator field; empty for failed rows.
    pub activator_initial: Vec<f64>,
    /// Initial inhibitor field; empty for failed rows.
    pub inhibitor_initial: Vec<f64>,
    /// Final activator field; empty for failed rows.
    pub activator_final: Vec<f64>,
    /// Final inhibitor field; empty for failed rows.
    pub inhibitor_final: Vec<f64>,
}

/// Execute a batch of jobs on a worker pool.
///
/// `worker_count` of `None` auto-sizes from the available parallelism;
/// explicit values are clamped to `[1, 64]`. Records come back sorted
/// by job index regardless of completion order.
pub fn run_batch(jobs: Vec<Job>, worker_count: Option<usize>) -> Vec<RunRecord> {
    let workers = resolved_worker_count(worker_count, jobs.len());
    if workers == 0 {
        return Vec::new();
    }

    let (job_tx, job_rx) = unbounded::<(usize, Job)>();
    let (rec_tx, rec_rx) = unbounded::<RunRecord>();

    for indexed in jobs.into_iter().enumerate() {
        let _ = job_tx.send(indexed);
    }
    drop(job_tx);

    let mut records: Vec<RunRecord> = thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let rec_tx = rec_tx.clone();
            scope.spawn(move || {
                while let Ok((index, job)) = job_rx.recv() {
                    let _ = rec_tx.send(run_one(index, &job));
                }
            });
        }
        drop(rec_tx);
        rec_rx.iter().collect()
    });

    records.sort_by_key(|r| r.index);
    records
}

/// Size the worker pool: explicit counts clamp to `[1, 64]`, otherwise
/// use the machine's parallelism capped by the number of jobs.
fn resolved_worker_count(requested: Option<usize>, job_count: usize) -> usize {
    if job_count == 0 {
        return 0;
    }
    let base = match requested {
        Some(n) => n.clamp(1, 64),
        None => thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
            .clamp(1, 16),
    };
    base.min(job_count)
}

/// Run one job and summarize it as a row.
fn run_one(index: usize, job: &Job) -> RunRecord {
    match run(&job.params) {
        Ok(outcome) => RunRecord {
            index,
            varied: job.varied.clone(),
            status: outcome.status.into(),
            steps_used: outcome.steps_used,
            activator_amplitude: amplitude(outcome.final_activator()),
            inhibitor_amplitude: amplitude(outcome.final_inhibitor()),
            steady_state: outcome.steady_state,
            activator_initial: outcome.initial_activator().to_vec(),
            inhibitor_initial: outcome.initial_inhibitor().to_vec(),
            activator_final: outcome.final_activator().to_vec(),
            inhibitor_final: outcome.final_inhibitor().to_vec(),
        },
        Err(e) => RunRecord {
            index,
            varied: job.varied.clone(),
            status: RowStatus::Failed {
                reason: e.to_string(),
            },
            steps_used: 0,
            activator_amplitude: f64::NAN,
            inhibitor_amplitude: f64::NAN,
            steady_state: None,
            activator_initial: Vec::new(),
            inhibitor_initial: Vec::new(),
            activator_final: Vec::new(),
            inhibitor_final: Vec::new(),
        },
    }
}

/// Peak-to-trough range of a field.
fn amplitude(field: &[f64]) -> f64 {
    let max = field.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = field.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

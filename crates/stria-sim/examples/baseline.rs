//! Run the baseline patterning simulation and print a trajectory summary.

use stria_core::{InitMode, Params, TransportMode};
use stria_sim::run;

fn main() {
    let params = Params {
        init_mode: InitMode::ActivatorSpike,
        activator_type: TransportMode::MembraneTethered,
        steps: 50_000,
        ..Params::default()
    };

    let outcome = run(&params).expect("baseline parameters are valid");

    println!(
        "status: {}  steps used: {}  snapshots: {}",
        outcome.status.as_str(),
        outcome.steps_used,
        outcome.activator_history.len(),
    );

    let last = outcome.final_activator();
    let max = last.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = last.iter().cloned().fold(f64::INFINITY, f64::min);
    println!("final activator range: [{min:.4}, {max:.4}]");
}

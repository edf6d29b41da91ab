//! Result-table and constants writers.
//!
//! The CSV carries only the varied parameters plus the run outputs —
//! everything held constant across the sweep goes to a tab-separated
//! sidecar instead, so wide sweeps stay readable. Serialized fields are
//! quoted because their compact form contains commas.

use crate::runner::RunRecord;
use std::io::{self, Write};
use stria_core::{field, Params};

/// Output column names following the varied-parameter columns.
const OUTPUT_COLS: &[&str] = &[
    "status",
    "steps_used",
    "activator_steady_state",
    "inhibitor_steady_state",
    "activator_amplitude",
    "inhibitor_amplitude",
    "activator_final",
    "inhibitor_final",
];

/// Write the batch results table as CSV.
///
/// The header is the varied keys of the first record (every record in
/// one batch shares the same sweep) followed by the output columns. An
/// empty record list writes nothing.
pub fn write_csv<W: Write>(mut w: W, records: &[RunRecord]) -> io::Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };

    let mut header: Vec<&str> = first.varied.iter().map(|(k, _)| k.as_str()).collect();
    header.extend_from_slice(OUTPUT_COLS);
    writeln!(w, "{}", header.join(","))?;

    for rec in records {
        for (_, value) in &rec.varied {
            write!(w, "{value},")?;
        }
        let (ss_act, ss_inh) = match &rec.steady_state {
            Some(ss) => (format!("{}", ss.activator), format!("{}", ss.inhibitor)),
            None => (String::new(), String::new()),
        };
        writeln!(
            w,
            "{},{},{},{},{},{},\"{}\",\"{}\"",
            rec.status.as_str(),
            rec.steps_used,
            ss_act,
            ss_inh,
            rec.activator_amplitude,
            rec.inhibitor_amplitude,
            field::encode(&rec.activator_final),
            field::encode(&rec.inhibitor_final),
        )?;
    }
    Ok(())
}

/// Write the constant (un-swept) parameters as tab-separated lines.
///
/// Covers every numeric schema key not named in `varied_keys`, plus the
/// policy tags and the clamp switch.
pub fn write_constants<W: Write>(
    mut w: W,
    base: &Params,
    varied_keys: &[String],
) -> io::Result<()> {
    for key in Params::KEYS {
        if varied_keys.iter().any(|k| k == key) {
            continue;
        }
        // KEYS and get() cover the same schema, so this always yields.
        if let Some(value) = base.get(key) {
            writeln!(w, "{key}\t{value}")?;
        }
    }
    writeln!(w, "init_mode\t{}", base.init_mode)?;
    writeln!(w, "activator_type\t{}", base.activator_type)?;
    writeln!(w, "clamp_negative\t{}", base.clamp_negative)?;
    Ok(())
}

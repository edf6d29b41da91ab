//! Compact textual codec for spatial fields.
//!
//! Fields cross the CSV boundary as a JSON-array-like list of floats,
//! e.g. `[0,1.5,2.25]`. The decoder is deliberately lenient about
//! whitespace so rows that passed through spreadsheet tooling still
//! parse: enclosing brackets are trimmed and any run of whitespace
//! around the comma separators is ignored.

use std::error::Error;
use std::fmt;

/// Serialize a field to its compact textual form.
///
/// Values are written with the shortest representation that round-trips
/// through [`decode`] exactly.
pub fn encode(field: &[f64]) -> String {
    let mut out = String::with_capacity(2 + field.len() * 8);
    out.push('[');
    for (i, v) in field.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // `{}` on f64 is the shortest string that parses back to the
        // same bits, so encode/decode is lossless.
        out.push_str(&format!("{v}"));
    }
    out.push(']');
    out
}

/// Parse a field from its compact textual form.
///
/// Accepts optional enclosing brackets and arbitrary whitespace around
/// values and separators. An empty list (`[]` or an all-whitespace
/// string) decodes to an empty field.
pub fn decode(text: &str) -> Result<Vec<f64>, FieldParseError> {
    let trimmed = text
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| FieldParseError {
                token: token.to_string(),
            })
        })
        .collect()
}

/// A token in a serialized field failed to parse as a float.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldParseError {
    /// The offending token, trimmed.
    pub token: String,
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid float in serialized field: '{}'", self.token)
    }
}

impl Error for FieldParseError {}

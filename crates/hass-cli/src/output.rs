//! Output: exactly one pretty-printed JSON document on stdout.

use std::io::{self, Write};

use hass_api::Outcome;

/// Print an outcome to stdout.
pub fn print_outcome(outcome: &Outcome) {
    let mut out = io::stdout().lock();
    // A closed stdout (e.g. `| head`) leaves nothing useful to report.
    let _ = writeln!(out, "{}", outcome.to_json_pretty());
}

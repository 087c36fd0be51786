//! Terminal report for lint mode

use crate::engine::Diagnostic;
use console::style;
use std::io::{self, Write};

/// Write one block per input: the file name, one line per diagnostic and a
/// count. Clean input produces no output.
pub fn write_report<W: Write>(
    out: &mut W,
    filename: &str,
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", style(filename).underlined())?;
    for d in diagnostics {
        writeln!(
            out,
            "  {}:{}  {}  {}  {:?} -> {:?}",
            d.line,
            d.column,
            style("warning").yellow(),
            style(&d.rule).dim(),
            d.found,
            d.suggestion
        )?;
    }

    let noun = if diagnostics.len() == 1 { "problem" } else { "problems" };
    writeln!(out, "\n{} {}", diagnostics.len(), noun)
}

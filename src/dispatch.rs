//! Route resolved text to the engine and write the result

use crate::domain::PreferenceSet;
use crate::engine::Engine;
use crate::lint;
use std::io::{self, Write};

/// Name used in lint output when stdin has no `--stdin-filename`.
pub const STDIN_NAME: &str = "<stdin>";

/// Lint or transform `text` and write the outcome to `out`.
///
/// Transformed text is written verbatim, with nothing added.
pub fn dispatch<W: Write>(
    engine: &dyn Engine,
    text: &str,
    prefs: &PreferenceSet,
    out: &mut W,
) -> io::Result<()> {
    if prefs.lint {
        let diagnostics = engine.lint(text, prefs);
        tracing::debug!("Lint found {} problems", diagnostics.len());
        lint::write_report(out, prefs.filename.as_deref().unwrap_or(STDIN_NAME), &diagnostics)?;
    } else {
        out.write_all(engine.execute(text, prefs).as_bytes())?;
    }
    out.flush()
}

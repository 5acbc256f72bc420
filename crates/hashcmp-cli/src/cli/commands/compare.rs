//! `hashcmp <file>...` – hash every file and report whether they all match.

use anyhow::Result;
use hashcmp_core::{compare, HashMethod};
use std::io::{self, Write};
use std::path::PathBuf;

/// Run the comparison with stdout for results and stderr for diagnostics.
/// A mismatch is reported, not returned as an error.
pub fn run_compare(paths: &[PathBuf], method: HashMethod) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    let summary = compare::run(paths, method, &mut out, &mut diag)?;
    out.flush()?;
    tracing::debug!(
        files = summary.records.len(),
        uniform = summary.verdict.is_uniform(),
        "compare command done"
    );
    Ok(())
}

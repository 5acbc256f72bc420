//! The compare pipeline: validate, hash, report, decide.

use crate::algorithm::HashMethod;
use crate::checksum::{self, FileRecord};
use crate::error::CompareError;
use crate::report;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

/// Whether all hashed files share one digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Uniform,
    /// `distinct` is the number of different digests seen.
    Divergent { distinct: usize },
}

impl Verdict {
    /// Exactly one distinct digest is uniform; anything else (including no
    /// records at all) is divergent.
    pub fn of(records: &[FileRecord]) -> Self {
        let distinct: HashSet<&str> = records.iter().map(|r| r.digest.as_str()).collect();
        match distinct.len() {
            1 => Verdict::Uniform,
            n => Verdict::Divergent { distinct: n },
        }
    }

    pub fn is_uniform(self) -> bool {
        matches!(self, Verdict::Uniform)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub records: Vec<FileRecord>,
    pub verdict: Verdict,
}

/// Run the whole comparison over `paths`.
///
/// Missing inputs are reported one per line on `diag` before failing with
/// [`CompareError::MissingFiles`]. Progress, result lines and the verdict go to
/// `out`. Result lines are only written once every file hashed successfully.
/// Write failures on either stream are reported as `write` I/O errors.
pub fn run<P, W, E>(
    paths: &[P],
    method: HashMethod,
    out: &mut W,
    diag: &mut E,
) -> Result<Summary, CompareError>
where
    P: AsRef<Path>,
    W: Write,
    E: Write,
{
    let missing = crate::validate::missing_files(paths);
    if !missing.is_empty() {
        for path in &missing {
            tracing::warn!(path = %path.display(), "file not found");
            writeln!(diag, "{}", report::missing_file_line(path)).map_err(stream_error)?;
        }
        return Err(CompareError::MissingFiles(missing));
    }

    writeln!(out, "{}", report::progress_line(paths.len())).map_err(stream_error)?;
    let records = checksum::hash_files(paths, method)?;

    report::write_records(out, &records).map_err(stream_error)?;
    let verdict = Verdict::of(&records);
    report::write_verdict(out, verdict).map_err(stream_error)?;

    tracing::info!(files = records.len(), %method, ?verdict, "compare finished");
    Ok(Summary { records, verdict })
}

fn stream_error(e: std::io::Error) -> CompareError {
    CompareError::io("write", "<output>", e)
}

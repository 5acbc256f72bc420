//! User-facing lines printed by a compare run.

use crate::checksum::FileRecord;
use crate::compare::Verdict;
use std::io::{self, Write};
use std::path::Path;

/// Prefix for diagnostics (missing files, fatal errors).
pub const ERROR_MARKER: &str = "[-!-]";
/// Prefix for progress and success messages.
pub const INFO_MARKER: &str = "[---]";

pub const SAME_CONTENT: &str = "[---] OK. All files have the same content.";
pub const DIFFERENT_HASH: &str = "      WRONG. Different hash found !     ";
const BANNER_WIDTH: usize = 50;

pub fn missing_file_line(path: &Path) -> String {
    format!("{ERROR_MARKER} File not found: {}", path.display())
}

pub fn error_line(err: impl std::fmt::Display) -> String {
    format!("{ERROR_MARKER} ERROR: {err}")
}

pub fn progress_line(count: usize) -> String {
    format!("{INFO_MARKER} Calculating hashes for {count} file(s). Please wait.")
}

/// `<hex-digest> <algorithm> <path>`
pub fn record_line(record: &FileRecord) -> String {
    format!(
        "{} {} {}",
        record.digest,
        record.algorithm,
        record.path.display()
    )
}

pub fn write_records<W: Write>(out: &mut W, records: &[FileRecord]) -> io::Result<()> {
    for r in records {
        writeln!(out, "{}", record_line(r))?;
    }
    Ok(())
}

pub fn write_verdict<W: Write>(out: &mut W, verdict: Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Uniform => writeln!(out, "{SAME_CONTENT}"),
        Verdict::Divergent { .. } => {
            let rule = "*".repeat(BANNER_WIDTH);
            writeln!(out, "{rule}")?;
            writeln!(out, "{DIFFERENT_HASH}")?;
            writeln!(out, "{rule}")
        }
    }
}

//! Error types for the compare pipeline.

use std::io;
use std::path::PathBuf;

/// Failures that end a compare run before a verdict is reached.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// One or more inputs are not existing regular files. Each path has
    /// already been reported on the diagnostic stream.
    #[error("Check filenames and try again.")]
    MissingFiles(Vec<PathBuf>),

    /// An I/O operation failed: opening or reading an input, or writing the report.
    #[error("{op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompareError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

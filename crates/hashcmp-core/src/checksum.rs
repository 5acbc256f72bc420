//! Per-file digest computation.
//!
//! Each file is read fully into memory and hashed in one pass. The handle is
//! dropped before the next file is opened.

use crate::algorithm::HashMethod;
use crate::error::CompareError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Outcome of hashing one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path exactly as given by the user.
    pub path: PathBuf,
    /// Lowercase hex digest.
    pub digest: String,
    pub algorithm: HashMethod,
}

/// Compute the digest of a file and return it as lowercase hex.
pub fn digest_path(path: &Path, method: HashMethod) -> Result<String, CompareError> {
    let mut f = File::open(path).map_err(|e| CompareError::io("open", path, e))?;
    let mut content = Vec::new();
    f.read_to_end(&mut content)
        .map_err(|e| CompareError::io("read", path, e))?;
    Ok(method.digest(&content))
}

/// Hash every path in order. Stops at the first failure; no partial list is
/// returned.
pub fn hash_files<P: AsRef<Path>>(
    paths: &[P],
    method: HashMethod,
) -> Result<Vec<FileRecord>, CompareError> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), %method, "hashing file");
        let digest = digest_path(path, method)?;
        records.push(FileRecord {
            path: path.to_path_buf(),
            digest,
            algorithm: method,
        });
    }
    Ok(records)
}

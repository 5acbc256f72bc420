//! Existence check run before any file is hashed.

use std::path::{Path, PathBuf};

/// Return every path that is not an existing regular file, in input order.
/// Directories and dangling symlinks count as missing.
pub fn missing_files<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_file())
        .map(Path::to_path_buf)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_present_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, b"a").unwrap();
        assert!(missing_files(&[&a, &a]).is_empty());
    }

    #[test]
    fn reports_every_missing_path_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, b"a").unwrap();
        let x = dir.path().join("x.txt");
        let y = dir.path().join("y.txt");
        assert_eq!(missing_files(&[&x, &a, &y]), vec![x, y]);
    }

    #[test]
    fn directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(missing_files(&[dir.path()]), vec![dir.path().to_path_buf()]);
    }
}

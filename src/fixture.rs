//! Fixture discovery and path resolution.
//!
//! A fixture is a source file whose extension marks it as a test input; its
//! expectation lives in a sibling record file sharing the base name.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::HarnessError;

/// Enumerate fixture sources directly inside `dir` (not recursive), in
/// whatever order the directory listing provides. Callers must not rely on
/// a particular order beyond "deterministic per OS/filesystem".
pub fn discover(dir: &Path, fixture_ext: &str) -> Result<Vec<PathBuf>, HarnessError> {
    let mut fixtures = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HarnessError::Io {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("failed to walk directory")),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == fixture_ext) {
            fixtures.push(path.to_path_buf());
        }
    }
    Ok(fixtures)
}

/// The record file sitting next to a fixture source: same base name, record
/// extension.
pub fn record_path(source: &Path, record_ext: &str) -> PathBuf {
    source.with_extension(record_ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_record_path_swaps_extension() {
        assert_eq!(
            record_path(Path::new("tests/cases/a.prl"), "test"),
            PathBuf::from("tests/cases/a.test")
        );
    }

    #[test]
    fn test_discover_filters_by_extension_non_recursively() {
        let dir = std::env::temp_dir().join("goldcrest-discover-test");
        let nested = dir.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.join("a.prl"), "").unwrap();
        fs::write(dir.join("a.test"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(nested.join("deep.prl"), "").unwrap();

        let mut found = discover(&dir, "prl").unwrap();
        found.sort();
        assert_eq!(found, vec![dir.join("a.prl")]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_missing_directory_errors() {
        let result = discover(Path::new("no/such/dir"), "prl");
        assert!(matches!(result, Err(HarnessError::Io { .. })));
    }
}

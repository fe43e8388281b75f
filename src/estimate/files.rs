//! File-size collection for token estimation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A path that could not be sized. Never escalated to an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWarning {
    pub path: PathBuf,
    pub cause: String,
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot read {}: {}", self.path.display(), self.cause)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEstimate {
    pub tokens: u64,
    pub total_bytes: u64,
    pub files_counted: usize,
    pub warnings: Vec<FileWarning>,
}

#[derive(Debug, Default)]
pub(crate) struct CollectedSizes {
    pub total_bytes: u64,
    pub files_counted: usize,
    pub warnings: Vec<FileWarning>,
}

impl CollectedSizes {
    fn add(&mut self, bytes: u64) {
        self.total_bytes = self.total_bytes.saturating_add(bytes);
        self.files_counted += 1;
    }

    fn warn(&mut self, path: &Path, cause: impl fmt::Display) {
        let warning = FileWarning { path: path.to_path_buf(), cause: cause.to_string() };
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Sum byte sizes of `paths`. Directories are walked recursively and every
/// regular file inside them counts.
pub(crate) fn collect_sizes<P: AsRef<Path>>(paths: &[P]) -> CollectedSizes {
    let mut sizes = CollectedSizes::default();

    for path in paths {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => collect_dir(path, &mut sizes),
            Ok(meta) => sizes.add(meta.len()),
            Err(e) => sizes.warn(path, e),
        }
    }

    sizes
}

fn collect_dir(root: &Path, sizes: &mut CollectedSizes) {
    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                sizes.warn(&path, e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.metadata() {
            Ok(meta) => sizes.add(meta.len()),
            Err(e) => sizes.warn(entry.path(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::ContentKind;
    use crate::estimate::TokenEstimator;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unreadable_file_is_skipped_with_warning() {
        let tmp = TempDir::new().expect("tmp");
        let readable = tmp.path().join("notes.txt");
        fs::write(&readable, "a".repeat(400)).expect("write");
        let missing = tmp.path().join("missing.txt");

        let estimate = TokenEstimator::default()
            .estimate_from_files(&[readable, missing.clone()], ContentKind::Prose)
            .expect("estimate");

        assert_eq!(estimate.tokens, 100);
        assert_eq!(estimate.total_bytes, 400);
        assert_eq!(estimate.files_counted, 1);
        assert_eq!(estimate.warnings.len(), 1);
        assert_eq!(estimate.warnings[0].path, missing);
        assert!(estimate.warnings[0].to_string().starts_with("Cannot read"));
    }

    #[test]
    fn all_files_unreadable_yields_zero_tokens() {
        let tmp = TempDir::new().expect("tmp");
        let paths = [tmp.path().join("a.txt"), tmp.path().join("b.txt")];

        let estimate =
            TokenEstimator::default().estimate_from_files(&paths, ContentKind::Code).expect("estimate");

        assert_eq!(estimate.tokens, 0);
        assert_eq!(estimate.files_counted, 0);
        assert_eq!(estimate.warnings.len(), 2);
    }

    #[test]
    fn directories_are_walked_recursively() {
        let tmp = TempDir::new().expect("tmp");
        let nested = tmp.path().join("src").join("inner");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::write(tmp.path().join("src").join("lib.rs"), "x".repeat(30)).expect("write lib");
        fs::write(nested.join("mod.rs"), "y".repeat(10)).expect("write mod");

        let estimate = TokenEstimator::default()
            .estimate_from_files(&[tmp.path().join("src")], ContentKind::Code)
            .expect("estimate");

        assert_eq!(estimate.total_bytes, 40);
        assert_eq!(estimate.files_counted, 2);
        assert_eq!(estimate.tokens, 14);
        assert!(estimate.warnings.is_empty());
    }

    #[test]
    fn empty_file_list_is_zero() {
        let paths: [&str; 0] = [];
        let estimate =
            TokenEstimator::default().estimate_from_files(&paths, ContentKind::Prose).expect("estimate");
        assert_eq!(estimate.tokens, 0);
        assert!(estimate.warnings.is_empty());
    }
}

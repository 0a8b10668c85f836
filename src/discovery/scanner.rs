//! File system scanner for discovering PHP sources.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for PHP files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered files, sorted within each scanned directory.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
    }
}

/// Scan a directory for PHP files.
///
/// Recursively walks the directory, skipping excluded paths and files
/// without one of the manifest's extensions. Exclude patterns are matched
/// against paths relative to `root`.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    walk(root, root, manifest)
}

/// Scan multiple source paths. Exclude patterns are matched against paths
/// relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(walk(&source_path, base_path, manifest));
    }

    result
}

fn walk(dir: &Path, base: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !dir.exists() {
        return result;
    }

    let excluded = |path: &Path| manifest.is_excluded(path.strip_prefix(base).unwrap_or(path));

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !excluded(e.path()))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if entry.file_type().is_file() && manifest.has_extension(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

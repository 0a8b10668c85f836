//! File discovery for phpdocfmt projects.
//!
//! Finds the PHP files to format, either from a `phpdocfmt.yaml` manifest
//! in the project root or by scanning the whole directory.
//!
//! # Example
//!
//! ```ignore
//! use phpdoc::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! println!("Found {} files", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "phpdocfmt.yaml";

/// Result of discovering files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// Whether a phpdocfmt.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

/// Discover PHP files in a project directory.
///
/// Looks for a `phpdocfmt.yaml` manifest in the root directory. If found,
/// uses the manifest's sources, excludes and extensions. Otherwise, scans
/// the entire directory for `.php` files.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, root, &manifest);

    Ok(DiscoveryResult { has_manifest, scan })
}

/// Discover files from explicit paths.
///
/// Files are taken as given whatever their extension; directories are
/// scanned using `manifest`.
pub fn discover_paths(paths: &[PathBuf], manifest: &Manifest) -> ScanResult {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, manifest));
        } else {
            scan.files.push(path.clone());
        }
    }

    scan
}

//! Init command implementation.
//!
//! Generates a `phpdocfmt.yaml` manifest from the PHP files found in a
//! project.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{PhpdocError, Result};
use crate::output::{display_path, plural, Printer};

/// Pattern written for Composer's dependency directory.
const VENDOR_EXCLUDE: &str = "vendor/*";

/// Initialize a project by generating a phpdocfmt.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing phpdocfmt.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(PhpdocError::Format {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut manifest = Manifest::default();
    if args.path.join("vendor").is_dir() {
        manifest.excludes.push(VENDOR_EXCLUDE.to_string());
    }

    printer.status("Scanning", &display_path(&args.path));
    let scan = scan_directory(&args.path, &manifest);

    // Top-level directories holding PHP files; "." for files in the root
    let mut source_dirs = BTreeSet::new();
    for file in &scan.files {
        let relative = file.strip_prefix(&args.path).unwrap_or(file);
        let mut components = relative.components();
        match (components.next(), components.next()) {
            (Some(first), Some(_)) => {
                source_dirs.insert(format!("{}/", first.as_os_str().to_string_lossy()));
            }
            _ => {
                source_dirs.insert(".".to_string());
            }
        }
    }

    let mut yaml = String::new();

    if !source_dirs.is_empty() && !source_dirs.contains(".") {
        yaml.push_str("sources:\n");
        for dir in &source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    if !manifest.excludes.is_empty() {
        yaml.push_str("excludes:\n");
        for pattern in &manifest.excludes {
            yaml.push_str(&format!("  - \"{}\"\n", pattern));
        }
    }

    yaml.push_str("extensions:\n");
    for ext in &manifest.extensions {
        yaml.push_str(&format!("  - {}\n", ext));
    }

    fs::write(&manifest_path, &yaml).map_err(|e| PhpdocError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.note("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "PHP file", "PHP files")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Printer;
    use tempfile::tempdir;

    fn init(dir: &std::path::Path, force: bool) -> Result<()> {
        let args = InitArgs {
            path: dir.to_path_buf(),
            force,
        };
        run(args, &Printer::new())
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.php"), "<?php\n").unwrap();

        init(dir.path(), false).unwrap();

        let content = fs::read_to_string(dir.path().join("phpdocfmt.yaml")).unwrap();
        assert!(!content.contains("sources:"));
        assert!(content.contains("extensions:\n  - php\n"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("phpdocfmt.yaml"), "sources: [lib/]").unwrap();

        assert!(init(dir.path(), false).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("phpdocfmt.yaml"), "sources: [lib/]").unwrap();

        init(dir.path(), true).unwrap();

        let content = fs::read_to_string(dir.path().join("phpdocfmt.yaml")).unwrap();
        assert!(!content.contains("lib/"));
    }

    #[test]
    fn test_init_discovers_source_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/Http")).unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        fs::write(dir.path().join("src/Http/Kernel.php"), "<?php\n").unwrap();
        fs::write(dir.path().join("tests/KernelTest.php"), "<?php\n").unwrap();
        fs::write(dir.path().join("README.md"), "# app\n").unwrap();

        init(dir.path(), false).unwrap();

        let content = fs::read_to_string(dir.path().join("phpdocfmt.yaml")).unwrap();
        let manifest = Manifest::parse(&content).unwrap();
        assert_eq!(manifest.sources, vec!["src/", "tests/"]);
        assert!(manifest.excludes.is_empty());
    }

    #[test]
    fn test_init_excludes_vendor() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("vendor/acme")).unwrap();
        fs::write(dir.path().join("src/App.php"), "<?php\n").unwrap();
        fs::write(dir.path().join("vendor/acme/Lib.php"), "<?php\n").unwrap();

        init(dir.path(), false).unwrap();

        let content = fs::read_to_string(dir.path().join("phpdocfmt.yaml")).unwrap();
        let manifest = Manifest::parse(&content).unwrap();
        assert_eq!(manifest.sources, vec!["src/"]);
        assert_eq!(manifest.excludes, vec!["vendor/*"]);
    }

    #[test]
    fn test_init_empty_directory() {
        let dir = tempdir().unwrap();

        init(dir.path(), false).unwrap();

        let content = fs::read_to_string(dir.path().join("phpdocfmt.yaml")).unwrap();
        assert!(!content.contains("sources:"));
        assert_eq!(Manifest::parse(&content).unwrap().extensions, vec!["php"]);
    }
}

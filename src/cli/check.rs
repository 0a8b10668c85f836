//! Check command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths, Manifest, MANIFEST_FILENAME};
use crate::error::{PhpdocError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate_source, ValidationResult};

/// Report doc comments that do not parse or are not formatted
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: project sources)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let files = if args.paths.is_empty() {
        let found = discover(".")?;
        if found.has_manifest {
            printer.note("Using", MANIFEST_FILENAME);
        }
        found.scan.files
    } else {
        let manifest = Manifest::load_or_default(Path::new("."))?;
        discover_paths(&args.paths, &manifest).files
    };

    if files.is_empty() {
        printer.skipped("no PHP files found");
        return Ok(());
    }

    let result = check_files(&files, printer)?;

    if result.is_ok() {
        printer.status("Checked", &plural(files.len(), "file", "files"));
        return Ok(());
    }

    Err(PhpdocError::Format {
        message: format!(
            "{}, {}",
            plural(result.error_count(), "syntax error", "syntax errors"),
            plural(
                result.warning_count(),
                "unformatted comment",
                "unformatted comments"
            )
        ),
        help: Some("Run `phpdocfmt fmt -w` after fixing syntax errors".to_string()),
    })
}

/// Validate each file, printing its diagnostics as it goes.
fn check_files(files: &[PathBuf], printer: &Printer) -> Result<ValidationResult> {
    let mut total = ValidationResult::new();

    for file in files {
        let source = super::read_source(file)?;
        let result = validate_source(&source);
        let shown = display_path(file);
        for diagnostic in result.iter() {
            printer.diagnostic(&shown, diagnostic);
        }
        total.merge(result);
    }

    Ok(total)
}

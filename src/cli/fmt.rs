//! Fmt command implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover_paths, Manifest};
use crate::error::{PhpdocError, Result, SourceError};
use crate::output::{display_path, plural, Printer};
use crate::source::{format_source, Formatted};
use crate::validation::Diagnostic;

/// Format doc comments in PHP files
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Files or directories to format (default: standard input)
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place instead of printing them
    #[arg(short, long)]
    pub write: bool,
}

pub fn run(args: FmtArgs, printer: &Printer) -> Result<()> {
    if args.paths.is_empty() {
        if args.write {
            return Err(PhpdocError::Format {
                message: "cannot use --write with standard input".to_string(),
                help: Some("Pass the files to rewrite as arguments".to_string()),
            });
        }
        let formatted = format_source(&super::read_stdin()?);
        report_errors(printer, "<stdin>", &formatted.errors);
        std::io::stdout().write_all(formatted.output.as_bytes())?;
        return finish(formatted.errors.len());
    }

    let manifest = Manifest::load_or_default(Path::new("."))?;
    let scan = discover_paths(&args.paths, &manifest);
    if scan.is_empty() {
        printer.skipped("no PHP files found");
        return Ok(());
    }

    let mut errors = 0;
    let mut rewritten = 0;
    let mut stdout = std::io::stdout().lock();

    for file in &scan.files {
        let formatted = format_file(file, printer)?;
        errors += formatted.errors.len();

        if !args.write {
            stdout.write_all(formatted.output.as_bytes())?;
        } else if write_back(file, &formatted)? {
            printer.status("Formatted", &display_path(file));
            rewritten += 1;
        }
    }

    if args.write {
        printer.status(
            "Finished",
            &format!(
                "{} rewritten, {} checked",
                plural(rewritten, "file", "files"),
                scan.total()
            ),
        );
    }

    finish(errors)
}

/// Format one file and report its comment errors.
fn format_file(path: &Path, printer: &Printer) -> Result<Formatted> {
    let source = super::read_source(path)?;
    let formatted = format_source(&source);
    report_errors(printer, &display_path(path), &formatted.errors);
    Ok(formatted)
}

/// Write a formatted file back. Files with errors or no changes are left alone.
fn write_back(path: &Path, formatted: &Formatted) -> Result<bool> {
    if formatted.has_errors() || formatted.changed == 0 {
        return Ok(false);
    }
    fs::write(path, &formatted.output).map_err(|e| PhpdocError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })?;
    Ok(true)
}

fn report_errors(printer: &Printer, path: &str, errors: &[SourceError]) {
    for err in errors {
        printer.diagnostic(path, &Diagnostic::syntax(err.pos, err.message.clone()));
    }
}

fn finish(errors: usize) -> Result<()> {
    if errors == 0 {
        return Ok(());
    }
    Err(PhpdocError::Format {
        message: format!(
            "{} could not be formatted",
            plural(errors, "doc comment", "doc comments")
        ),
        help: Some("Comments with syntax errors are left unchanged".to_string()),
    })
}

pub mod check;
pub mod completions;
pub mod dump;
pub mod fmt;
pub mod init;

use std::io::Read;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{PhpdocError, Result};

/// phpdocfmt - Canonical formatter for PHPDoc comments
#[derive(Parser, Debug)]
#[command(name = "phpdocfmt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format doc comments in PHP files
    Fmt(fmt::FmtArgs),

    /// Report doc comments that do not parse or are not formatted
    Check(check::CheckArgs),

    /// Print the syntax tree of one doc comment as JSON
    Dump(dump::DumpArgs),

    /// Initialize a project (generates phpdocfmt.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read a source file.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PhpdocError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

/// Read all of standard input.
pub(crate) fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

//! Dump command implementation.
//!
//! Prints the syntax tree of one doc comment, or of one type expression,
//! as JSON.

use std::path::PathBuf;

use clap::Args;

use crate::error::{PhpdocError, Result};
use crate::parser::{parse_block, parse_type};

/// Print the syntax tree of one doc comment as JSON
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// File holding a single doc comment (default: standard input)
    pub input: Option<PathBuf>,

    /// Parse the input as a type expression instead of a comment
    #[arg(long = "type")]
    pub type_expr: bool,
}

pub fn run(args: DumpArgs) -> Result<()> {
    let text = match &args.input {
        Some(path) => super::read_source(path)?,
        None => super::read_stdin()?,
    };
    println!("{}", to_json(&text, args.type_expr)?);
    Ok(())
}

fn to_json(text: &str, type_expr: bool) -> Result<String> {
    let json = if type_expr {
        serde_json::to_string_pretty(&parse_type(text)?)
    } else {
        serde_json::to_string_pretty(&parse_block(text)?)
    };
    json.map_err(|e| PhpdocError::Format {
        message: format!("Failed to serialize syntax tree: {}", e),
        help: None,
    })
}

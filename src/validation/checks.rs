//! Checks over the doc comments of one source file.
//!
//! Each check takes the source text and its located comments and returns a
//! `ValidationResult`.

use crate::parser::parse_block;
use crate::source::{format_comment, DocComment};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Report every doc comment that does not parse.
pub fn check_syntax(source: &str, comments: &[DocComment]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for comment in comments {
        if let Err(err) = parse_block(&source[comment.range.clone()]) {
            let pos = comment.start.add(err.position());
            result.push(Diagnostic::syntax(pos, err.message));
        }
    }

    result
}

/// Warn about doc comments that are not in canonical form.
///
/// Comments with syntax errors are skipped; `check_syntax` reports them.
pub fn check_formatting(source: &str, comments: &[DocComment]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for comment in comments {
        let text = &source[comment.range.clone()];
        let Ok(printed) = format_comment(text, &comment.indent) else {
            continue;
        };
        if printed != text {
            result.push(Diagnostic::unformatted(comment.start));
        }
    }

    result
}

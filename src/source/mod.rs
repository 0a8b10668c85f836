//! Formatting doc comments inside PHP source files.
//!
//! Everything outside doc comments is copied through untouched. A comment
//! that fails to parse is left as written and its error is reported with
//! a position relative to the whole file.

mod comments;

pub use comments::{find_doc_comments, DocComment};

use crate::error::{SourceError, SyntaxError};
use crate::parser::parse_block;
use crate::render::print_block;

/// Result of formatting one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// The source with every parseable doc comment reprinted.
    pub output: String,
    /// One entry per comment that failed to parse.
    pub errors: Vec<SourceError>,
    /// Number of comments whose text changed.
    pub changed: usize,
}

impl Formatted {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Reformat every doc comment in `source`.
pub fn format_source(source: &str) -> Formatted {
    let mut output = String::with_capacity(source.len());
    let mut errors = Vec::new();
    let mut changed = 0;
    let mut last = 0;

    for comment in find_doc_comments(source) {
        output.push_str(&source[last..comment.range.start]);
        let text = &source[comment.range.clone()];
        match format_comment(text, &comment.indent) {
            Ok(printed) => {
                if printed != text {
                    changed += 1;
                }
                output.push_str(&printed);
            }
            Err(err) => {
                errors.push(SourceError {
                    pos: comment.start.add(err.position()),
                    message: err.message,
                });
                output.push_str(text);
            }
        }
        last = comment.range.end;
    }
    output.push_str(&source[last..]);

    Formatted {
        output,
        errors,
        changed,
    }
}

/// Reprint one comment that sits on a line indented by `indent`.
///
/// The result omits the leading indent and the trailing newline so it can
/// replace the comment text in place.
pub fn format_comment(text: &str, indent: &str) -> Result<String, SyntaxError> {
    let mut block = parse_block(text)?;
    block.indent = indent.to_string();
    let printed = print_block(&block);
    let printed = printed.strip_prefix(indent).unwrap_or(&printed);
    Ok(printed.strip_suffix('\n').unwrap_or(printed).to_string())
}

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Position;

/// A syntax error in a single doc comment or type expression.
///
/// Line and column are relative to the parsed text and point at the
/// token that triggered the failure.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("line:{line}:{column}: {message}")]
#[diagnostic(code(phpdoc::syntax))]
pub struct SyntaxError {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl SyntaxError {
    pub fn new(pos: Position, message: impl Into<String>) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
            message: message.into(),
        }
    }

    /// Position of the offending token.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Failure writing a rendered block to an output sink.
#[derive(Error, Diagnostic, Debug)]
pub enum PrintError {
    #[error("write failed: {0}")]
    #[diagnostic(code(phpdoc::print))]
    Io(#[from] std::io::Error),
}

/// Main error type for phpdoc operations
#[derive(Error, Diagnostic, Debug)]
pub enum PhpdocError {
    #[error("IO error: {0}")]
    #[diagnostic(code(phpdoc::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(phpdoc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Syntax error: {0}")]
    #[diagnostic(code(phpdoc::syntax))]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Print(#[from] PrintError),

    #[error("Parse error: {message}")]
    #[diagnostic(code(phpdoc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Format error: {message}")]
    #[diagnostic(code(phpdoc::format))]
    Format {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PhpdocError>;

/// Error found while formatting a doc comment inside a larger source file.
///
/// The position is relative to the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub pos: Position,
    pub message: String,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pos, self.message)
    }
}

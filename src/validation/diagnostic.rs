//! Findings reported by `phpdocfmt check`.

use std::fmt;

use crate::parser::Position;

pub const SYNTAX: &str = "phpdoc::check::syntax";
pub const UNFORMATTED: &str = "phpdoc::check::unformatted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// A problem with one doc comment, located in its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub pos: Position,
    pub help: Option<&'static str>,
}

impl Diagnostic {
    /// The comment does not parse; `pos` is where parsing stopped.
    pub fn syntax(pos: Position, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: SYNTAX,
            message: message.into(),
            pos,
            help: None,
        }
    }

    /// The comment parses but printing it would change it.
    pub fn unformatted(pos: Position) -> Self {
        Self {
            severity: Severity::Warning,
            code: UNFORMATTED,
            message: "doc comment is not formatted".to_string(),
            pos,
            help: Some("Run `phpdocfmt fmt -w` to rewrite it"),
        }
    }
}

/// Diagnostics for one or more files.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Order diagnostics by position, errors first on a tie.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by_key(|d| (d.pos.line, d.pos.column, d.severity != Severity::Error));
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

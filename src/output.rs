//! Terminal output for the phpdocfmt CLI.
//!
//! Progress lines follow Cargo: a right-aligned verb, then the message.
//! Findings follow rustc: `severity[code]: path:line:col: message`, with an
//! optional `help:` line underneath. Everything here goes to stderr; stdout
//! carries formatted source and JSON dumps only.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity};

const VERB_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy)]
enum Style {
    Done,
    Note,
    Skip,
    Error,
    Location,
    Help,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Done => "\x1b[1;32m",
            Style::Note => "\x1b[1;36m",
            Style::Skip | Style::Help => "\x1b[1;33m",
            Style::Error => "\x1b[1;31m",
            Style::Location => "\x1b[36m",
        }
    }
}

impl From<Severity> for Style {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Skip,
        }
    }
}

/// Writes progress and findings to stderr, coloured when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Work done, e.g. `   Formatted src/Clock.php`.
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(&self.verb_line(Style::Done, verb, message));
    }

    /// Something learned along the way, e.g. discovered source directories.
    pub fn note(&self, verb: &str, message: &str) {
        self.emit(&self.verb_line(Style::Note, verb, message));
    }

    /// A step that had nothing to act on.
    pub fn skipped(&self, message: &str) {
        self.emit(&self.verb_line(Style::Skip, "Skipped", message));
    }

    /// Report one finding in `path`.
    pub fn diagnostic(&self, path: &str, diagnostic: &Diagnostic) {
        self.emit(&self.render(path, diagnostic));
    }

    fn render(&self, path: &str, d: &Diagnostic) -> String {
        let label = self.paint(Style::from(d.severity), &d.severity.to_string());
        let location = self.paint(Style::Location, &format!("{}:{}", path, d.pos));
        let mut out = format!("{}[{}]: {}: {}", label, d.code, location, d.message);
        if let Some(help) = d.help {
            out.push_str(&format!("\n  {} {}", self.paint(Style::Help, "help:"), help));
        }
        out
    }

    fn verb_line(&self, style: Style, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        format!("{} {}", self.paint(style, &verb), message)
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            format!("{}{}\x1b[0m", style.ansi(), text)
        } else {
            text.to_string()
        }
    }

    fn emit(&self, text: &str) {
        let _ = writeln!(io::stderr().lock(), "{text}");
    }
}

/// `plural(1, "file", "files")` is "1 file".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { many })
}

/// The path relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

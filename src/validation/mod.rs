//! Validation of doc comments in PHP source files.
//!
//! Runs the checks over one file and reports syntax errors and comments
//! that are not in canonical form. Used by `phpdocfmt check`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult, SYNTAX, UNFORMATTED};

use crate::source::find_doc_comments;

/// Run all checks against one source file. Diagnostics come back in
/// source order.
pub fn validate_source(source: &str) -> ValidationResult {
    let comments = find_doc_comments(source);
    let mut result = ValidationResult::new();

    result.merge(checks::check_syntax(source, &comments));
    result.merge(checks::check_formatting(source, &comments));
    result.sort();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_clean_source() {
        let result = validate_source("<?php\n/** @var int $x */\n$x = 1;\n");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_reports_errors_and_warnings() {
        let source = "<?php\n/**   @return  void */\n/** @var array ::foo */\n";
        let result = validate_source(source);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);

        let codes: Vec<&str> = result.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![UNFORMATTED, SYNTAX]);
    }

    #[test]
    fn test_validate_source_without_php() {
        assert!(validate_source("<html>/** nothing */</html>").is_ok());
    }
}

//! phpdoc - PHPDoc comment parser and formatter
//!
//! Parses `/** ... */` doc comments into a syntax tree, including the PHP
//! type expressions used by their tags, and prints them back in canonical
//! form with aligned tag columns.
//!
//! ```
//! let block = phpdoc::parse_block("/**  @param  int $x  the value */").unwrap();
//! assert_eq!(phpdoc::print_block(&block), "/** @param int $x the value */\n");
//! ```

pub mod ast;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod source;
pub mod validation;

pub use ast::{Block, Line, Tag, Type};
pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{PhpdocError, PrintError, Result, SourceError, SyntaxError};
pub use parser::{parse_block, parse_type, Position};
pub use render::{print_block, write_block};
pub use source::{format_source, Formatted};
pub use validation::{validate_source, Diagnostic, Severity, ValidationResult};

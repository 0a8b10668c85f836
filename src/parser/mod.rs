//! Parser for PHPDoc comments.
//!
//! The lexer turns comment text into positioned tokens; a recursive-descent
//! parser pulls them on demand and builds the [`crate::ast`] tree. The first
//! error ends the parse.

mod block;
mod lexer;
mod phptype;
mod span;
mod stream;
mod token;

pub use lexer::Lexer;
pub use span::{position_at, Position};
pub use token::{Token, TokenKind};

use crate::ast::{Block, Type};
use crate::error::SyntaxError;

use stream::Parser;

/// Parse one doc comment, delimiters included.
pub fn parse_block(text: &str) -> Result<Block, SyntaxError> {
    Parser::new(text).parse_block()
}

/// Parse a bare type expression.
pub fn parse_type(text: &str) -> Result<Type, SyntaxError> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    let ty = parser.parse_type()?;
    parser.expect_end()?;
    Ok(ty)
}

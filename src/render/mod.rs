//! Canonical printer for parsed doc comments.
//!
//! Printing is a pure function of the tree: the original text is never
//! consulted. Tag fields are laid out into columns and aligned across
//! neighbouring tag lines.

mod align;
mod block;
mod phptype;

use std::io::Write;

pub use align::{align, Row};

use crate::ast::Block;
use crate::error::PrintError;

/// Render a block to canonical text, terminated by a newline.
pub fn print_block(block: &Block) -> String {
    block::render(block)
}

/// Write a block's canonical text to `w`.
pub fn write_block<W: Write>(w: &mut W, block: &Block) -> Result<(), PrintError> {
    w.write_all(print_block(block).as_bytes())?;
    Ok(())
}

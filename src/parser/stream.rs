//! Token cursor shared by the block and type grammars.

use crate::error::SyntaxError;

use super::lexer::Lexer;
use super::token::{Token, TokenKind};

pub(crate) type PResult<T> = std::result::Result<T, SyntaxError>;

/// A token that was read ahead and handed back by [`Parser::backup`].
struct Pending {
    tok: Token,
    spaced: bool,
}

/// Recursive-descent parser state.
///
/// `tok` is the current token. [`Parser::next`] skips horizontal
/// whitespace and records whether any was skipped in `spaced`;
/// [`Parser::next_raw`] does not skip anything.
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) tok: Token,
    pub(crate) spaced: bool,
    prev: Token,
    prev_spaced: bool,
    pending: Option<Pending>,
    /// Current type nesting, bounded to keep recursion off the stack limit.
    pub(crate) depth: u32,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        let mut lexer = Lexer::new(src);
        let tok = lexer.next_token();
        let prev = tok.clone();
        Self {
            lexer,
            tok,
            spaced: false,
            prev,
            prev_spaced: false,
            pending: None,
            depth: 0,
        }
    }

    /// Advance to the next token, including whitespace.
    pub(crate) fn next_raw(&mut self) {
        let (tok, spaced) = match self.pending.take() {
            Some(p) => (p.tok, p.spaced),
            None => (self.lexer.next_token(), false),
        };
        self.prev = std::mem::replace(&mut self.tok, tok);
        self.prev_spaced = std::mem::replace(&mut self.spaced, spaced);
    }

    /// Advance to the next non-whitespace token.
    pub(crate) fn next(&mut self) {
        self.next_raw();
        if self.tok.kind == TokenKind::Whitespace {
            let prev = self.prev.clone();
            let prev_spaced = self.prev_spaced;
            self.next_raw();
            self.prev = prev;
            self.prev_spaced = prev_spaced;
            self.spaced = true;
        }
    }

    /// Step back to the previously consumed token. Only one step may be
    /// pending at a time.
    pub(crate) fn backup(&mut self) {
        assert!(self.pending.is_none(), "parser backed up twice");
        let tok = std::mem::replace(&mut self.tok, self.prev.clone());
        let spaced = std::mem::replace(&mut self.spaced, self.prev_spaced);
        self.pending = Some(Pending { tok, spaced });
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn got(&mut self, kind: TokenKind) -> bool {
        if self.tok.kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consume and return the current token, which must have the given kind.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> PResult<Token> {
        if self.tok.kind != kind {
            return Err(self.unexpected(&kind.to_string()));
        }
        let tok = self.tok.clone();
        self.next();
        Ok(tok)
    }

    /// Skip a whitespace run at the current position.
    pub(crate) fn skip_whitespace(&mut self) {
        if self.tok.kind == TokenKind::Whitespace {
            self.next_raw();
            self.spaced = true;
        }
    }

    /// Error at the current token.
    pub(crate) fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.tok.pos, message)
    }

    /// "expecting X, found Y" at the current token.
    pub(crate) fn unexpected(&self, expected: &str) -> SyntaxError {
        self.error(format!("expecting {}, found {}", expected, self.tok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    #[test]
    fn test_next_skips_whitespace() {
        let mut p = Parser::new("a  b");
        assert_eq!(p.tok.kind, Ident);
        p.next();
        assert_eq!(p.tok.text, "b");
        assert!(p.spaced);
        p.next();
        assert_eq!(p.tok.kind, Eof);
        assert!(!p.spaced);
    }

    #[test]
    fn test_next_raw_keeps_whitespace() {
        let mut p = Parser::new("a b");
        p.next_raw();
        assert_eq!(p.tok.kind, Whitespace);
    }

    #[test]
    fn test_backup_restores_previous_token() {
        let mut p = Parser::new("A & ...");
        p.next();
        assert_eq!(p.tok.kind, And);
        p.next();
        assert_eq!(p.tok.kind, Ellipsis);
        assert!(p.spaced);

        p.backup();
        assert_eq!(p.tok.kind, And);
        assert!(p.spaced);

        p.next();
        assert_eq!(p.tok.kind, Ellipsis);
        assert_eq!(p.tok.pos.column, 5);
        assert!(p.spaced);
    }

    #[test]
    #[should_panic(expected = "parser backed up twice")]
    fn test_double_backup_panics() {
        let mut p = Parser::new("a b c");
        p.next();
        p.next();
        p.backup();
        p.backup();
    }

    #[test]
    fn test_expect_reports_found_token() {
        let mut p = Parser::new("int");
        let err = p.expect(Var).unwrap_err();
        assert_eq!(err.to_string(), "line:1:1: expecting Var, found Ident(\"int\")");
    }
}

//! Tokenizer for doc comment text.
//!
//! The lexer never fails: text it cannot classify is folded into
//! [`TokenKind::Other`] runs, so arbitrary prose in descriptions always
//! tokenizes. Every token's text is the exact slice of input it consumed.

use logos::Logos;

use super::span::Position;
use super::token::{Token, TokenKind};

/// Streaming tokenizer over a comment's text.
///
/// Wraps the `logos` lexer for [`TokenKind`], adding line and column
/// tracking and a sticky end of input.
pub struct Lexer<'a> {
    logos: logos::Lexer<'a, TokenKind>,
    pos: Position,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            logos: TokenKind::lexer(src),
            pos: Position::start(),
            done: false,
        }
    }

    /// Return the next token. After end of input every call returns
    /// [`TokenKind::Eof`] at the same position.
    pub fn next_token(&mut self) -> Token {
        let pos = self.pos;
        if self.done {
            return Token::new(TokenKind::Eof, "", pos);
        }
        let Some(result) = self.logos.next() else {
            self.done = true;
            return Token::new(TokenKind::Eof, "", pos);
        };

        // every input character is covered by some pattern
        let kind = result.unwrap_or(TokenKind::Other);
        let text = self.logos.slice();
        for c in text.chars() {
            self.pos.advance(c);
        }
        Token::new(kind, text, pos)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        (tok.kind != TokenKind::Eof).then_some(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(src: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(src).map(|t| (t.kind, t.text)).collect()
    }

    fn k(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_scan_symbols() {
        assert_eq!(
            kinds("/***/\\?()[]{}<>,:::...|&="),
            vec![
                k(OpenDoc, "/**"),
                k(CloseDoc, "*/"),
                k(Backslash, "\\"),
                k(Qmark, "?"),
                k(Lparen, "("),
                k(Rparen, ")"),
                k(Lbrack, "["),
                k(Rbrack, "]"),
                k(Lbrace, "{"),
                k(Rbrace, "}"),
                k(Lt, "<"),
                k(Gt, ">"),
                k(Comma, ","),
                k(DoubleColon, "::"),
                k(Colon, ":"),
                k(Ellipsis, "..."),
                k(Or, "|"),
                k(And, "&"),
                k(Equals, "="),
            ]
        );
    }

    #[test]
    fn test_scan_words() {
        assert_eq!(
            kinds("array object callable static $this self class-string"),
            vec![
                k(Array, "array"),
                k(Whitespace, " "),
                k(Object, "object"),
                k(Whitespace, " "),
                k(Callable, "callable"),
                k(Whitespace, " "),
                k(Static, "static"),
                k(Whitespace, " "),
                k(This, "$this"),
                k(Whitespace, " "),
                k(Ident, "self"),
                k(Whitespace, " "),
                k(Ident, "class-string"),
            ]
        );
    }

    #[test]
    fn test_scan_tags() {
        assert_eq!(
            kinds("@param @property-read @Foo @"),
            vec![
                k(Tag, "@param"),
                k(Whitespace, " "),
                k(Tag, "@property-read"),
                k(Whitespace, " "),
                k(Other, "@Foo "),
                k(Other, "@"),
            ]
        );
    }

    #[test]
    fn test_scan_vars() {
        assert_eq!(
            kinds("$_0_žluťoučký_9 $a-b $ $9"),
            vec![
                k(Var, "$_0_žluťoučký_9"),
                k(Whitespace, " "),
                k(Other, "$a-b "),
                k(Other, "$ "),
                k(Other, "$9"),
            ]
        );
    }

    #[test]
    fn test_scan_strings() {
        assert_eq!(kinds(r"'a\'b\\'"), vec![k(Str, r"'a\'b\\'")]);
        assert_eq!(kinds(r"'\t':string}*/"), vec![k(Other, r"'\t':string}"), k(CloseDoc, "*/")]);
        assert_eq!(kinds(r"'\'"), vec![k(Other, r"'\'")]);
        assert_eq!(kinds("'abc\nx"), vec![k(Other, "'abc"), k(Newline, "\n"), k(Ident, "x")]);
    }

    #[test]
    fn test_scan_dots_and_slashes() {
        assert_eq!(kinds(".. x"), vec![k(Other, ".. x")]);
        assert_eq!(kinds("/* x */"), vec![k(Other, "/* x "), k(CloseDoc, "*/")]);
        assert_eq!(kinds("a/b"), vec![k(Ident, "a"), k(Other, "/b")]);
    }

    #[test]
    fn test_scan_other_runs_through_whitespace() {
        assert_eq!(
            kinds("#x y@z"),
            vec![k(Other, "#x y"), k(Tag, "@z")]
        );
    }

    #[test]
    fn test_scan_ints() {
        assert_eq!(kinds("20?"), vec![k(Int, "20"), k(Qmark, "?")]);
    }

    #[test]
    fn test_positions_count_chars() {
        let toks: Vec<Token> = Lexer::new("/** ž $x\n *").collect();
        let positions: Vec<(u32, u32)> = toks.iter().map(|t| (t.pos.line, t.pos.column)).collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 4), (1, 5), (1, 6), (1, 7), (1, 9), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_scan_dashed_and_this_vars() {
        assert_eq!(
            kinds("$this-x $thisx $-"),
            vec![
                k(Other, "$this-x "),
                k(Var, "$thisx"),
                k(Whitespace, " "),
                k(Other, "$-"),
            ]
        );
    }

    #[test]
    fn test_scan_reserved_words_need_exact_match() {
        assert_eq!(
            kinds("arrays Array array-key"),
            vec![
                k(Ident, "arrays"),
                k(Whitespace, " "),
                k(Ident, "Array"),
                k(Whitespace, " "),
                k(Ident, "array-key"),
            ]
        );
    }

    #[test]
    fn test_scan_other_from_unknown_char() {
        assert_eq!(kinds("\"\r!x"), vec![k(Other, "\"\r!x")]);
        assert_eq!(kinds("/**/"), vec![k(OpenDoc, "/**"), k(Other, "/")]);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, Ident);
        let eof = lexer.next_token();
        assert_eq!(eof.kind, Eof);
        assert_eq!(eof.pos, Position::new(1, 2));
        assert_eq!(lexer.next_token(), eof);
    }
}

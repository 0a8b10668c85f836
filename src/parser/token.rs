//! Tokens of the doc comment micro-syntax.
//!
//! Token kinds are recognised by a `logos` DFA. Longest match decides
//! between overlapping patterns; literal tokens beat the identifier and
//! variable patterns at equal length, which is how reserved words and
//! `$this` are told apart. Text that fits no pattern is folded into an
//! [`TokenKind::Other`] run by the callbacks at the bottom of this file.

use std::fmt;

use logos::Logos;

use super::span::Position;

/// The kind of a [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum TokenKind {
    /// Produced by the lexer wrapper once input is exhausted.
    Eof,
    #[token("\n")] Newline,
    #[regex(r"[ \t]+")] Whitespace,

    // Symbols
    #[token("/**")] OpenDoc,
    #[token("*/")] CloseDoc,
    #[token("*")] Asterisk,
    #[token("\\")] Backslash,
    #[token("?")] Qmark,
    #[token("(")] Lparen,
    #[token(")")] Rparen,
    #[token("[")] Lbrack,
    #[token("]")] Rbrack,
    #[token("{")] Lbrace,
    #[token("}")] Rbrace,
    #[token("<")] Lt,
    #[token(">")] Gt,
    #[token(",")] Comma,
    #[token(":")] Colon,
    #[token("::")] DoubleColon,
    #[token("...")] Ellipsis,
    #[token("|")] Or,
    #[token("&")] And,
    #[token("=")] Equals,

    // Reserved words
    #[token("$this")] This,
    #[token("array")] Array,
    #[token("object")] Object,
    #[token("callable")] Callable,
    #[token("static")] Static,

    // A dash may start or continue an identifier (`class-string`).
    #[regex(r"[_a-zA-Z\x{80}-\x{10FFFF}-][_a-zA-Z0-9\x{80}-\x{10FFFF}-]*")] Ident,
    #[regex(r"@[a-z-]+")] Tag,
    #[regex(r"\$[_a-zA-Z\x{80}-\x{10FFFF}][_a-zA-Z0-9\x{80}-\x{10FFFF}]*")] Var,
    #[regex(r"[0-9]+")] Int,
    // Only `\\` and `\'` are escapes.
    #[regex(r"'([^'\\\n]|\\['\\])*'")] Str,

    #[token("@", other_run)]
    #[token("$", other_run)]
    #[regex(r"\$([_a-zA-Z\x{80}-\x{10FFFF}][_a-zA-Z0-9\x{80}-\x{10FFFF}]*)?-[_a-zA-Z0-9\x{80}-\x{10FFFF}-]*", other_run)]
    #[regex(r"\.\.?", other_run)]
    #[regex(r"/\*?", other_run)]
    #[regex(r"'([^'\\\n]|\\['\\])*", broken_string)]
    #[regex(r"[^\n \t/*@$'.:\\?()\[\]{}<>,|&=0-9_a-zA-Z\x{80}-\x{10FFFF}\-]", other_run)]
    Other,
}

impl TokenKind {
    /// Literal text of symbols and reserved words.
    pub fn symbol(self) -> Option<&'static str> {
        use TokenKind::*;
        let text = match self {
            OpenDoc => "/**",
            CloseDoc => "*/",
            Asterisk => "*",
            Backslash => "\\",
            Qmark => "?",
            Lparen => "(",
            Rparen => ")",
            Lbrack => "[",
            Rbrack => "]",
            Lbrace => "{",
            Rbrace => "}",
            Lt => "<",
            Gt => ">",
            Comma => ",",
            Colon => ":",
            DoubleColon => "::",
            Ellipsis => "...",
            Or => "|",
            And => "&",
            Equals => "=",
            This => "$this",
            Array => "array",
            Object => "object",
            Callable => "callable",
            Static => "static",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.symbol() {
            return f.write_str(text);
        }
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "Newline",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Ident => "Ident",
            TokenKind::Tag => "Tag",
            TokenKind::Var => "Var",
            TokenKind::Int => "Int",
            TokenKind::Str => "String",
            _ => "Other",
        };
        f.write_str(name)
    }
}

/// Extend an "other" run up to a newline, `@`, `$`, `*` or end of input.
fn other_run(lex: &mut logos::Lexer<TokenKind>) {
    let rest = lex.remainder();
    let end = rest.find(['\n', '@', '$', '*']).unwrap_or(rest.len());
    lex.bump(end);
}

/// A quoted run that hit a newline, end of input or a bad escape before
/// its closing quote. The whole run, quote included, is other text.
fn broken_string(lex: &mut logos::Lexer<TokenKind>) {
    if lex.remainder().starts_with('\\') {
        lex.bump(1);
    }
    other_run(lex);
}

/// A token with its source text and the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof | TokenKind::Newline => write!(f, "{}", self.kind),
            kind if kind.symbol().is_some() => write!(f, "{}", kind),
            kind => write!(f, "{}({:?})", kind, self.text),
        }
    }
}

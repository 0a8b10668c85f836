//! Locating doc comments in PHP source.
//!
//! The source is lexed with `mago-syntax`, which knows inline HTML,
//! strings, heredocs and the other comment forms; the doc comments are
//! read off its trivia list.

use std::ops::Range;

use bumpalo::Bump;
use mago_database::file::FileId;
use mago_syntax::ast::TriviaKind;
use mago_syntax::parser::parse_file_content;

use crate::parser::Position;

/// A doc comment found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// Byte range of the comment, delimiters included.
    pub range: Range<usize>,
    /// Position of the opening `/**`.
    pub start: Position,
    /// Leading whitespace of the line the comment starts on.
    pub indent: String,
}

/// Find every doc comment in `source`, in order.
///
/// Only `/**` followed by whitespace opens a doc comment; `/**/` and
/// `/**@var int*/` are left alone.
pub fn find_doc_comments(source: &str) -> Vec<DocComment> {
    let mut tracker = PositionTracker::new(source);
    doc_comment_ranges(source)
        .into_iter()
        .map(|range| DocComment {
            start: tracker.at(range.start),
            indent: line_indent(source, range.start).to_string(),
            range,
        })
        .collect()
}

fn doc_comment_ranges(source: &str) -> Vec<Range<usize>> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let arena = Bump::new();
        let file_id = FileId::new(b"input.php");
        let program = parse_file_content(&arena, file_id, source.as_bytes());

        let mut ranges: Vec<Range<usize>> = program
            .trivia
            .as_slice()
            .iter()
            .filter(|t| matches!(t.kind, TriviaKind::DocBlockComment))
            .map(|t| t.span.start.offset as usize..t.span.end.offset as usize)
            .filter(|range| source.get(range.clone()).is_some_and(opens_doc_comment))
            .collect();
        ranges.sort_by_key(|range| range.start);
        ranges
    }));

    // a parser panic leaves the file unformatted rather than aborting
    result.unwrap_or_default()
}

fn opens_doc_comment(text: &str) -> bool {
    text.strip_prefix("/**")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Leading blanks of the line containing `offset`, up to `offset`.
fn line_indent(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &source[line_start..offset];
    let end = prefix
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(prefix.len());
    &prefix[..end]
}

/// Incremental offset-to-position conversion for ascending offsets.
struct PositionTracker<'a> {
    source: &'a str,
    offset: usize,
    pos: Position,
}

impl<'a> PositionTracker<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            pos: Position::start(),
        }
    }

    fn at(&mut self, offset: usize) -> Position {
        for c in self.source[self.offset..offset].chars() {
            self.pos.advance(c);
        }
        self.offset = offset;
        self.pos
    }
}

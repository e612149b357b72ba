//! Offset to line/column mapping.

use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};


/// 1-based line and column. Columns count characters, not bytes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    /// Moves past `text`, for callers walking contiguous pieces of a source.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Byte offsets of every line start in a source text.
#[derive(Debug, Clone)]
pub struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<TextSize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            source
                .match_indices('\n')
                .map(|(i, _)| TextSize::from(i as u32 + 1)),
        );
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offsets past the end clamp to the end of the source; offsets inside a
    /// multi-byte character resolve to that character.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let mut end = usize::from(offset).min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        let offset = TextSize::from(end as u32);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = usize::from(self.line_starts[line]);
        let column = self.source[start..end].chars().count();
        LineCol {
            line: line as u32 + 1,
            column: column as u32 + 1,
        }
    }
}

#[derive(Serialize)]
struct RangeRepr {
    start: u32,
    end: u32,
}

/// Serializes a range as `{ "start": .., "end": .. }` byte offsets.
pub(crate) fn serialize_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    RangeRepr {
        start: range.start().into(),
        end: range.end().into(),
    }
    .serialize(s)
}

#[cfg(test)]
#[path = "line_index_tests.rs"]
mod line_index_tests;


use std::fmt;
use std::ops::Range;

/// Identifies a source within a file table, such as the one used for
/// rendering diagnostics. Sources never need to know their own name.
pub type File = usize;

/// A single point in some source text. The offset is in bytes, whereas the
/// line and column are one-indexed and the column counts `char`s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the very first character of any source.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Get the position immediately after `text`, assuming `text` starts at
    /// this position.
    pub fn advance(self, text: &str) -> Self {
        let mut position = self;

        for c in text.chars() {
            position.offset += c.len_utf8();

            if c == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }

        position
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span represents a continuous range of text in a particular source file.
/// Spans can be combined using the `+` operator to create the smallest
/// continuous span containing both.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    pub file: File,
    pub start: Position,

    /// One past the last character in the span.
    pub end: Position,
}

impl Span {
    pub fn new(file: File, start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset);
        Self { file, start, end }
    }

    /// An empty span at the given position.
    pub fn point(file: File, at: Position) -> Self {
        Self::new(file, at, at)
    }

    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::ops::Add for Span {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert!(self.file == rhs.file);

        let start = if self.start.offset <= rhs.start.offset {
            self.start
        } else {
            rhs.start
        };

        let end = if self.end.offset >= rhs.end.offset {
            self.end
        } else {
            rhs.end
        };

        Self {
            file: self.file,
            start,
            end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start.offset..span.end.offset
    }
}

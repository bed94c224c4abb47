//! Line/column positions and the source sections attached to diagnostics.

use std::fmt;

/// A line/column location in source text.
///
/// Lines are 1-based. Columns are 0-based and count `char`s, not bytes;
/// the column resets to 0 immediately after a `'\n'` is consumed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position { line: 1, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
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

/// A line/column-bounded span of source text plus its literal text.
///
/// `line` and `column` locate the first character of `text`. Sections are
/// built at the point of failure (or by terminal actions for their tokens)
/// and never outlive the value that carries them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Section {
    pub line: u32,
    pub column: u32,
    pub text: String,
}

impl Section {
    pub fn new(start: Position, text: impl Into<String>) -> Self {
        Section {
            line: start.line,
            column: start.column,
            text: text.into(),
        }
    }

    /// Position of the first character.
    pub fn start(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Number of characters in the section.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Column one past the last character, assuming the section does not
    /// span a newline.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a single source line never exceeds u32::MAX chars"
    )]
    pub fn end_column(&self) -> u32 {
        self.column + self.len() as u32
    }

    /// Returns `true` if the text contains no line terminator.
    pub fn is_single_line(&self) -> bool {
        !self.text.contains('\n')
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

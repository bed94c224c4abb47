//! Named source text.
//!
//! A [`Source`] is the raw textual content a lexing session reads from,
//! plus a display name for diagnostics. Acquisition (files, readers,
//! in-memory strings) happens here, before any lexing starts; the cursor
//! only ever sees a character stream.

use std::io::{self, Read};
use std::path::Path;

use crate::Cursor;

/// Name given to sources built from in-memory strings.
const ANONYMOUS: &str = "<anonymous>";

/// Source text plus a display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    name: String,
    content: String,
}

impl Source {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a source with no meaningful name.
    pub fn anonymous(content: impl Into<String>) -> Self {
        Self::new(ANONYMOUS, content)
    }

    /// Read a UTF-8 file. The path becomes the source name.
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), content))
    }

    /// Drain a reader into a new source.
    ///
    /// The reader is consumed to the end and dropped before this returns.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> io::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::new(name, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Create a [`Cursor`] positioned at the first character.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.content.chars())
    }

    /// Number of lines. A trailing newline opens one final empty line.
    pub fn line_count(&self) -> usize {
        memchr::memchr_iter(b'\n', self.content.as_bytes()).count() + 1
    }

    /// Text of the 1-based line `number`, without its terminator.
    ///
    /// A `\r` immediately before the `\n` is stripped as well. Returns `None`
    /// for line 0 and for lines past the end of the source.
    pub fn line(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        let bytes = self.content.as_bytes();

        let start = if index == 0 {
            0
        } else {
            memchr::memchr_iter(b'\n', bytes).nth(index - 1)? + 1
        };
        let end = memchr::memchr(b'\n', &bytes[start..]).map_or(bytes.len(), |off| start + off);

        let line = &self.content[start..end];
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

//! A ready-made token type for grammars that do not need their own.

use std::fmt;

use sift_lexer_core::{Position, Section};

/// A token of kind `K` with its text and source section.
///
/// `text` starts out as the matched lexeme. Actions that decode their input
/// (string escapes, for instance) replace it with [`Token::with_text`];
/// `section.text` always keeps the raw source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<K> {
    pub kind: K,
    pub text: String,
    pub section: Section,
}

impl<K> Token<K> {
    pub fn new(kind: K, section: Section) -> Self {
        Token {
            kind,
            text: section.text.clone(),
            section,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn start(&self) -> Position {
        self.section.start()
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.section)
    }
}

#[cfg(test)]
mod tests;

//! Lexing failures.
//!
//! Two disjoint kinds: a [`SyntaxError`] means the input has text no
//! registered path matches, and lexing can resume with another step. A
//! [`StallError`] means a terminal action matched without consuming
//! anything, which is a defect in the grammar and is always fatal.

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_lexer_core::{Position, Section};
use thiserror::Error;

/// Unmatched input at a position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message} at {section}")]
pub struct SyntaxError {
    pub message: String,
    /// The offending text. Never crosses a newline it did not start on.
    pub section: Section,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, section: Section) -> Self {
        SyntaxError {
            message: message.into(),
            section,
        }
    }

    /// Error for text that no registered path matches.
    #[cold]
    pub fn no_matcher(section: Section) -> Self {
        let message = format!("no matcher registered for '{}'", section.text);
        SyntaxError { message, section }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001)
            .with_message(self.message.clone())
            .with_label(self.section.clone(), "unrecognized input")
            .with_note("lexing resumes after this text")
    }
}

/// A terminal action matched but consumed no input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("lexer made no progress at {position}: terminal action consumed no input")]
pub struct StallError {
    /// Where the step started.
    pub position: Position,
}

impl StallError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(format!(
                "lexer made no progress at {}: terminal action consumed no input",
                self.position
            ))
            .with_label(Section::new(self.position, ""), "action matched here")
            .with_note("this is a defect in the grammar, not in the input")
            .with_suggestion("make sure every terminal action is reached through at least one edge")
    }
}

/// Any failure of a lexing step.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Stalled(#[from] StallError),
}

impl LexError {
    /// Whether lexing cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LexError::Stalled(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::Syntax(_) => ErrorCode::E0001,
            LexError::Stalled(_) => ErrorCode::E9001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::Syntax(err) => err.to_diagnostic(),
            LexError::Stalled(err) => err.to_diagnostic(),
        }
    }
}

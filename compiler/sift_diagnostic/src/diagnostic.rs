//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`]: the building blocks lexer errors
//! are converted into before rendering. Every diagnostic is an error; its
//! [`Category`] comes from its code.

use sift_lexer_core::Section;
use std::fmt;

use crate::{Category, ErrorCode};

/// A labeled section with a message.
///
/// Labels highlight specific source text and attach explanatory messages.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source text to highlight.
    pub section: Section,
    /// The label text explaining this location.
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(section: Section, message: impl Into<String>) -> Self {
        Label {
            section,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(section: Section, message: impl Into<String>) -> Self {
        Label {
            section,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic with all context needed for a good error message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled sections showing where the error occurred.
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Simple text suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, section: Section, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(section, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, section: Section, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(section, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The first primary label, if any.
    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.iter().find(|label| label.is_primary)
    }

    pub fn category(&self) -> Category {
        self.code.category()
    }

    /// Whether lexing stopped at this diagnostic.
    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {}",
            self.category().header(),
            self.code,
            self.message
        )
    }
}

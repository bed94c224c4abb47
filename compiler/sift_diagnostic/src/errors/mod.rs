//! Embedded error documentation for `explain` support.
//!
//! Each error code has a markdown documentation file that explains the error,
//! shows examples, and provides solutions. These are embedded at compile time
//! and can be accessed via `ErrorDocs::get()`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

/// Embedded documentation for each error code.
static DOCS: &[(ErrorCode, &str)] = &[
    // Lexical errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    // Internal errors (E9xxx)
    (ErrorCode::E9001, include_str!("E9001.md")),
];

#[cfg(test)]
mod tests;

//! Error codes for all lexer diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0001`) with the first digit
//! indicating the category. Used for `explain` lookups and documentation.

use std::fmt;

/// Error codes for all lexer diagnostics.
///
/// Format: E#### where the first digit indicates the category:
/// - E0xxx: Lexical errors (the input text is wrong)
/// - E9xxx: Internal errors (the grammar definition is wrong)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// No matcher registered for the input at this position
    E0001,
    /// Unterminated string literal
    E0002,

    // Internal Errors (E9xxx)
    /// Terminal action consumed no input
    E9001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E9001];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line summary, used by `explain` listings.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "no matcher registered for input",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E9001 => "terminal action consumed no input",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => Category::Lexical,
            ErrorCode::E9001 => Category::Internal,
        }
    }

    /// Check if this is an internal error (E9xxx).
    pub fn is_internal_error(&self) -> bool {
        self.category() == Category::Internal
    }
}

/// Who is at fault for an error: the input text or the grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// The input has no tokenization at this point. Lexing can resume
    /// after the offending text.
    Lexical,
    /// The grammar is defective. Lexing cannot continue.
    Internal,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lexical => "lexical",
            Category::Internal => "internal",
        }
    }

    /// Header word used in rendered diagnostics.
    pub fn header(self) -> &'static str {
        match self {
            Category::Lexical => "error",
            Category::Internal => "internal error",
        }
    }

    /// Whether lexing stops at an error of this category.
    pub fn is_fatal(self) -> bool {
        self == Category::Internal
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

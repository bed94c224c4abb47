//! Low-level building blocks for sift lexers.
//!
//! This crate has no `sift_*` dependencies. It provides:
//! - [`Source`]: named source text with line lookup for diagnostics
//! - [`Cursor`]: lookahead/consumption cursor over a character stream
//! - [`Position`] and [`Section`]: line/column bookkeeping for diagnostics
//!
//! The matcher trie and tokenization engine live in `sift_lexer`.

mod cursor;
mod section;
mod source;

pub use cursor::Cursor;
pub use section::{Position, Section};
pub use source::Source;

//! Diagnostic system for lexer error reporting.
//!
//! - Error codes for searchability (`sift explain E0001`)
//! - Clear messages (what went wrong)
//! - Primary section (where it went wrong, with the offending text)
//! - Notes (why it is wrong, what to check)
//!
//! Lexical errors (`E0xxx`) describe bad input. Internal errors (`E9xxx`)
//! describe a bad grammar definition and are never caused by the input text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{Category, ErrorCode};
pub use errors::ErrorDocs;

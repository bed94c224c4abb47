//! Diagnostic Emitters
//!
//! - Terminal: colored text with source snippets, for people
//! - JSON: one document per source, for editors and scripts
//!
//! Both render the same [`Diagnostic`] values through [`DiagnosticEmitter`].

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write;

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Close out a run that reported `error_count` errors.
    fn emit_summary(&mut self, error_count: usize);
}

/// Escape `s` for use inside a JSON string literal.
///
/// Shared with token output, which is written by hand the same way.
pub fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

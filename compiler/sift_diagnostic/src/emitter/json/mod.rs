//! JSON Emitter
//!
//! Writes one document per lexed source:
//!
//! ```text
//! {
//!   "source": "demo.sift",
//!   "diagnostics": [
//!     {
//!       "code": "E0001",
//!       "category": "lexical",
//!       "fatal": false,
//!       "message": "no matcher registered for '@'",
//!       "section": {"line": 1, "column": 4, "text": "@"},
//!       "label": "unrecognized input",
//!       "related": [],
//!       "notes": ["lexing resumes after this text"],
//!       "help": []
//!     }
//!   ],
//!   "error_count": 1,
//!   "stopped": false
//! }
//! ```
//!
//! `section` is the primary label's section (`null` when there is none).
//! Secondary labels go to `related`. `stopped` is set once a fatal
//! (internal) diagnostic has been written.

use std::io::Write;

use sift_lexer_core::{Section, Source};

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<'s, W: Write> {
    writer: W,
    source: Option<&'s str>,
    count: usize,
    stopped: bool,
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", escape_json(text))
}

fn quoted_or_null(text: Option<&str>) -> String {
    text.map_or_else(|| "null".to_string(), quoted)
}

fn section_json(section: &Section) -> String {
    format!(
        "{{\"line\": {}, \"column\": {}, \"text\": {}}}",
        section.line,
        section.column,
        quoted(&section.text)
    )
}

fn string_list(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|item| quoted(item)).collect();
    format!("[{}]", items.join(", "))
}

impl<'s, W: Write> JsonEmitter<'s, W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            source: None,
            count: 0,
            stopped: false,
        }
    }

    /// Name the source the diagnostics refer to.
    #[must_use]
    pub fn with_source<'t>(self, source: &'t Source) -> JsonEmitter<'t, W> {
        JsonEmitter {
            writer: self.writer,
            source: Some(source.name()),
            count: self.count,
            stopped: self.stopped,
        }
    }

    /// Open the document.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "{{");
        let _ = writeln!(self.writer, "  \"source\": {},", quoted_or_null(self.source));
        let _ = write!(self.writer, "  \"diagnostics\": [");
    }

    /// Close the diagnostics array and write the totals.
    pub fn end(&mut self) {
        if self.count > 0 {
            let _ = write!(self.writer, "\n  ");
        }
        let _ = writeln!(self.writer, "],");
        let _ = writeln!(self.writer, "  \"error_count\": {},", self.count);
        let _ = writeln!(self.writer, "  \"stopped\": {}", self.stopped);
        let _ = writeln!(self.writer, "}}");
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.count == 0 { "\n" } else { ",\n" };
        self.count += 1;
        self.stopped |= diagnostic.is_fatal();

        let primary = diagnostic.primary_label();
        let related: Vec<String> = diagnostic
            .labels
            .iter()
            .filter(|label| !label.is_primary)
            .map(|label| {
                format!(
                    "{{\"section\": {}, \"message\": {}}}",
                    section_json(&label.section),
                    quoted(&label.message)
                )
            })
            .collect();

        let w = &mut self.writer;
        let _ = write!(w, "{separator}");
        let _ = writeln!(w, "    {{");
        let _ = writeln!(w, "      \"code\": \"{}\",", diagnostic.code);
        let _ = writeln!(w, "      \"category\": \"{}\",", diagnostic.category());
        let _ = writeln!(w, "      \"fatal\": {},", diagnostic.is_fatal());
        let _ = writeln!(w, "      \"message\": {},", quoted(&diagnostic.message));
        let _ = writeln!(
            w,
            "      \"section\": {},",
            primary.map_or_else(|| "null".to_string(), |label| section_json(&label.section))
        );
        let _ = writeln!(
            w,
            "      \"label\": {},",
            quoted_or_null(primary.map(|label| label.message.as_str()))
        );
        let _ = writeln!(w, "      \"related\": [{}],", related.join(", "));
        let _ = writeln!(w, "      \"notes\": {},", string_list(&diagnostic.notes));
        let _ = writeln!(w, "      \"help\": {}", string_list(&diagnostic.suggestions));
        let _ = write!(w, "    }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// The document carries its own count; `end` writes it.
    fn emit_summary(&mut self, _error_count: usize) {}
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

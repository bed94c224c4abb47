//! Command handlers for the sift CLI.

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::{lex_file, lex_source, write_report, LexReport};

use sift_lexer_core::Source;

/// Read a source file, or exit with a readable message.
pub(crate) fn read_source(path: &str) -> Source {
    match Source::read(path) {
        Ok(source) => source,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

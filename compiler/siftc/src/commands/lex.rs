//! The `lex` command: tokenize a file with the demo grammar.

use std::io::{self, IsTerminal, Write};

use sift_diagnostic::emitter::{escape_json, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_lexer::{Position, Section, Token};
use sift_lexer_core::Source;

use crate::config::{LexOptions, OutputFormat};
use crate::grammar::{demo_lexer, TokenKind};

use super::read_source;

/// Tokens and diagnostics from lexing one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    pub tokens: Vec<Token<TokenKind>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

fn unterminated_string(token: &Token<TokenKind>) -> Diagnostic {
    let section = &token.section;
    let end = Section::new(Position::new(section.line, section.end_column()), "");
    Diagnostic::error(ErrorCode::E0002)
        .with_message("unterminated string literal")
        .with_label(section.clone(), "string starts here")
        .with_secondary_label(end, "no closing quote before the end of the line")
        .with_suggestion("add a closing `\"`")
}

/// Lex `source` with the demo grammar.
///
/// Stops at the first error unless `keep_going` is set. A stall always
/// stops lexing.
#[tracing::instrument(level = "debug", skip_all, fields(file = source.name()))]
pub fn lex_source(source: &Source, keep_going: bool) -> LexReport {
    let lexer = demo_lexer();
    let mut report = LexReport::default();

    for item in lexer.session(source.content()) {
        let stop = match item {
            Ok(token) if token.kind == TokenKind::UnterminatedStr => {
                report.diagnostics.push(unterminated_string(&token));
                !keep_going
            }
            Ok(token) => {
                report.tokens.push(token);
                false
            }
            Err(err) => {
                report.diagnostics.push(err.to_diagnostic());
                !keep_going || err.is_fatal()
            }
        };
        if stop {
            break;
        }
    }

    report
}

fn write_tokens_text(tokens: &[Token<TokenKind>], out: &mut impl Write) {
    for token in tokens {
        let _ = writeln!(
            out,
            "{} '{}' @ {}",
            token.kind,
            token.text.escape_debug(),
            token.section
        );
    }
}

fn write_tokens_json(tokens: &[Token<TokenKind>], out: &mut impl Write) {
    let _ = write!(out, "[");
    for (i, token) in tokens.iter().enumerate() {
        let separator = if i == 0 { "\n" } else { ",\n" };
        let _ = write!(
            out,
            "{separator}  {{\"kind\": \"{}\", \"text\": \"{}\", \"line\": {}, \"column\": {}}}",
            token.kind,
            escape_json(&token.text),
            token.section.line,
            token.section.column
        );
    }
    let _ = writeln!(out, "\n]");
}

/// Print `report`: tokens to `out`, diagnostics to `err`.
pub fn write_report(
    report: &LexReport,
    source: &Source,
    options: &LexOptions,
    is_tty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) {
    match options.format {
        OutputFormat::Text => {
            write_tokens_text(&report.tokens, out);
            if !report.diagnostics.is_empty() {
                let mut emitter = TerminalEmitter::with_color_mode(err, options.color, is_tty)
                    .with_source(source);
                emitter.emit_all(&report.diagnostics);
                emitter.emit_summary(report.error_count());
                emitter.flush();
            }
        }
        OutputFormat::Json => {
            write_tokens_json(&report.tokens, out);
            if !report.diagnostics.is_empty() {
                let mut emitter = JsonEmitter::new(err).with_source(source);
                emitter.begin();
                emitter.emit_all(&report.diagnostics);
                emitter.emit_summary(report.error_count());
                emitter.end();
                emitter.flush();
            }
        }
    }
}

/// Lex the file named in `options` and print the result. Exits with status
/// 1 if lexing reported errors.
pub fn lex_file(options: &LexOptions) {
    let Some(path) = options.path.as_deref() else {
        eprintln!("error: missing file path");
        eprintln!("Usage: sift lex <file> [options]");
        std::process::exit(1);
    };

    let source = read_source(path);
    let report = lex_source(&source, options.keep_going);

    let is_tty = io::stderr().is_terminal();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    write_report(&report, &source, options, is_tty, &mut out, &mut err);
    let _ = out.flush();

    if report.has_errors() {
        std::process::exit(1);
    }
}

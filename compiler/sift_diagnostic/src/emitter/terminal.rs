//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When a [`Source`] is attached, each label is rendered with the source
//! line it points into and a caret underline beneath the offending text.

use std::io::{self, Write};

use sift_lexer_core::Source;

use crate::{Category, Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const INTERNAL: &str = "\x1b[1;35m"; // Bold magenta
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always`, or `never` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'s Source>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source the diagnostics refer to, enabling snippets.
    #[must_use]
    pub fn with_source<'t>(self, source: &'t Source) -> TerminalEmitter<'t, W> {
        TerminalEmitter {
            writer: self.writer,
            colors: self.colors,
            source: Some(source),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, category: Category) {
        let color = match category {
            Category::Lexical => colors::ERROR,
            Category::Internal => colors::INTERNAL,
        };
        self.write_colored(category.header(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    /// Render a label as a source snippet:
    ///
    /// ```text
    ///   --> demo.sift:1:4
    ///    |
    ///  1 | let @ = 1
    ///    |     ^ unrecognized input
    /// ```
    fn write_snippet(&mut self, label: &Label, source: &Source) {
        let section = &label.section;
        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(
            self.writer,
            "  {marker} {}:{}:{}",
            source.name(),
            section.line,
            section.column
        );

        let Some(line) = source.line(section.line) else {
            let _ = write!(self.writer, "   = ");
            self.write_colored(&label.message, Self::label_color(label));
            let _ = writeln!(self.writer);
            return;
        };

        let number = section.line.to_string();
        let gutter = " ".repeat(number.len());
        let _ = writeln!(self.writer, " {gutter} |");
        let _ = writeln!(self.writer, " {number} | {line}");

        // Keep tabs so the underline lines up with the rendered source line.
        let indent: String = line
            .chars()
            .take(section.column as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let width = section
            .text
            .split('\n')
            .next()
            .map_or(0, |first| first.chars().count())
            .max(1);
        let glyph = if label.is_primary { "^" } else { "-" };
        let underline = format!("{} {}", glyph.repeat(width), label.message);

        let _ = write!(self.writer, " {gutter} | {indent}");
        self.write_colored(&underline, Self::label_color(label));
        let _ = writeln!(self.writer);
    }

    fn write_label_without_source(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {}: ", label.section);
        self.write_colored(&label.message, Self::label_color(label));
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'static, io::Stdout> {
    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl TerminalEmitter<'static, io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_header(diagnostic.category());
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            match self.source {
                Some(source) => self.write_snippet(label, source),
                None => self.write_label_without_source(label),
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }

        let cause = if error_count == 1 {
            "previous error".to_string()
        } else {
            format!("{error_count} previous errors")
        };
        self.write_colored("error", colors::ERROR);
        match self.source {
            Some(source) => {
                let _ = writeln!(self.writer, ": could not lex `{}` due to {cause}", source.name());
            }
            None => {
                let _ = writeln!(self.writer, ": lexing failed due to {cause}");
            }
        }
    }
}

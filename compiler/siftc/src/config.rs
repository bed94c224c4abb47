//! Options for the `lex` command.
//!
//! Parsed by hand from `--flag=value` arguments. The `SIFT_COLOR`
//! environment variable sets the default color mode; an explicit `--color`
//! flag wins over it.

use sift_diagnostic::emitter::ColorMode;

/// How tokens and diagnostics are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line, diagnostics with source snippets.
    #[default]
    Text,
    /// A JSON array of tokens on stdout, a JSON array of diagnostics on
    /// stderr.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options for `sift lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// File to lex.
    pub path: Option<String>,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Resume after syntax errors instead of stopping at the first one.
    pub keep_going: bool,
}

impl LexOptions {
    /// Defaults, with the color mode taken from `SIFT_COLOR` if set.
    pub fn from_env() -> Self {
        Self::with_env_color(std::env::var("SIFT_COLOR").ok().as_deref())
    }

    /// Defaults, with the color mode taken from `value` if it names one.
    pub fn with_env_color(value: Option<&str>) -> Self {
        let color = match value {
            Some(value) => ColorMode::parse(value).unwrap_or_else(|| {
                eprintln!("warning: ignoring SIFT_COLOR='{value}', expected auto, always, or never");
                ColorMode::Auto
            }),
            None => ColorMode::Auto,
        };
        LexOptions {
            color,
            ..LexOptions::default()
        }
    }
}

/// Apply `args` (everything after `sift lex`) on top of `base`.
///
/// Unknown flags and bad values are reported as warnings and ignored. The
/// first argument that is not a flag is the path.
pub fn parse_lex_options(args: &[String], base: LexOptions) -> LexOptions {
    let mut options = base;

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            if let Some(format) = OutputFormat::parse(format) {
                options.format = format;
            } else {
                eprintln!("warning: unknown format '{format}', options: text, json");
            }
        } else if let Some(color) = arg.strip_prefix("--color=") {
            if let Some(mode) = ColorMode::parse(color) {
                options.color = mode;
            } else {
                eprintln!("warning: unknown color mode '{color}', options: auto, always, never");
            }
        } else if arg == "--keep-going" || arg == "-k" {
            options.keep_going = true;
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            eprintln!("warning: ignoring extra argument '{arg}'");
        }
    }

    options
}

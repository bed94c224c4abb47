//! Property-based tests for the tokenization engine.
//!
//! Generates inputs over a small alphabet and checks, against a fixed
//! grammar of words, numbers, operators and whitespace:
//! 1. Total consumption: fully covered input is consumed exactly.
//! 2. Progress: every step consumes at least one character, so resuming
//!    after errors always reaches the end of input.
//! 3. Error spans never extend past a newline they did not start on.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use sift_lexer::{LexError, Lexer, MatcherBuilder, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Number,
    Arrow,
    Minus,
    Space,
    Newline,
}

fn grammar() -> Lexer<Token<Kind>> {
    let mut grammar = MatcherBuilder::new();
    grammar.when(char::is_alphabetic).emit(|ctx, c| {
        ctx.read_identifier(c);
        ctx.token(Kind::Word)
    });
    grammar.when(|c| c.is_ascii_digit()).emit(|ctx, c| {
        ctx.read_number(c);
        ctx.token(Kind::Number)
    });
    grammar.on('-').emit(|ctx, _| ctx.token(Kind::Minus));
    grammar.on_str("->").emit(|ctx, _| ctx.token(Kind::Arrow));
    grammar.on(' ').emit(|ctx, _| {
        ctx.skip_while(|c| c == ' ');
        ctx.token(Kind::Space)
    });
    grammar.on('\n').emit(|ctx, _| ctx.token(Kind::Newline));
    Lexer::new(&grammar)
}

/// Input made only of text the grammar covers.
fn covered_input() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-z][a-z0-9_]{0,6}",
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        Just("->".to_string()),
        Just("-".to_string()),
        " {1,3}",
        Just("\n".to_string()),
    ];
    prop::collection::vec(piece, 0..16).prop_map(|pieces| pieces.concat())
}

/// Input that may contain characters no path matches.
fn any_input() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c0-2 \\n@#>.-]{0,40}").expect("valid regex")
}

proptest! {
    #[test]
    fn covered_input_is_consumed_exactly(input in covered_input()) {
        let tokens = grammar().tokenize(&input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.section.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn resuming_after_errors_reaches_end(input in any_input()) {
        let lexer = grammar();
        let mut session = lexer.session(&input);
        let mut covered = String::new();
        let mut steps = 0;
        while session.has_next() {
            let before = session.cursor().offset();
            match session.parse_once() {
                Ok(tokens) => {
                    for token in tokens {
                        covered.push_str(&token.section.text);
                    }
                }
                Err(LexError::Syntax(err)) => covered.push_str(&err.section.text),
                Err(LexError::Stalled(err)) => {
                    return Err(TestCaseError::fail(format!("stalled: {err}")));
                }
            }
            prop_assert!(session.cursor().offset() > before);
            steps += 1;
            prop_assert!(steps <= input.chars().count());
        }
        prop_assert_eq!(&covered, &input);
    }

    #[test]
    fn error_spans_stay_on_one_line(input in any_input()) {
        for item in grammar().session(&input) {
            if let Err(LexError::Syntax(err)) = item {
                let text = &err.section.text;
                let body = text.strip_suffix('\n').unwrap_or(text);
                prop_assert!(!body.contains('\n'), "span crosses a line: {:?}", text);
                prop_assert!(!text.is_empty());
            }
        }
    }
}

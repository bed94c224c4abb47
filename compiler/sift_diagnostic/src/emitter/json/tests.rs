use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use sift_lexer_core::Position;

fn render(source: Option<&Source>, diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let emitter = JsonEmitter::new(&mut output);
    let mut emitter = match source {
        Some(source) => emitter.with_source(source),
        None => emitter,
    };
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.end();
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_document_shape() {
    let source = Source::new("demo.sift", "let @ = 1");
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("no matcher registered for '@'")
        .with_label(Section::new(Position::new(1, 4), "@"), "unrecognized input")
        .with_note("lexing resumes after this text");

    let expected = r#"{
  "source": "demo.sift",
  "diagnostics": [
    {
      "code": "E0001",
      "category": "lexical",
      "fatal": false,
      "message": "no matcher registered for '@'",
      "section": {"line": 1, "column": 4, "text": "@"},
      "label": "unrecognized input",
      "related": [],
      "notes": ["lexing resumes after this text"],
      "help": []
    }
  ],
  "error_count": 1,
  "stopped": false
}
"#;
    assert_eq!(render(Some(&source), &[diag]), expected);
}

#[test]
fn test_empty_document() {
    let expected = r#"{
  "source": null,
  "diagnostics": [],
  "error_count": 0,
  "stopped": false
}
"#;
    assert_eq!(render(None, &[]), expected);
}

#[test]
fn test_section_text_is_escaped() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("no matcher registered for '\"\\n'")
        .with_label(Section::new(Position::new(2, 3), "\"\\n"), "here");
    let text = render(None, &[diag]);
    assert!(
        text.contains(r#""section": {"line": 2, "column": 3, "text": "\"\\n"}"#),
        "got:\n{text}"
    );
}

#[test]
fn test_secondary_labels_are_related() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("unterminated string literal")
        .with_label(Section::new(Position::new(1, 0), "\"ab"), "string starts here")
        .with_secondary_label(Section::new(Position::new(1, 3), ""), "line ends here")
        .with_suggestion("add a closing `\"`");
    let text = render(None, &[diag]);
    assert!(text.contains(r#""label": "string starts here""#), "got:\n{text}");
    assert!(
        text.contains(
            r#""related": [{"section": {"line": 1, "column": 3, "text": ""}, "message": "line ends here"}]"#
        ),
        "got:\n{text}"
    );
    assert!(text.contains(r#""help": ["add a closing `\"`"]"#), "got:\n{text}");
}

#[test]
fn test_missing_primary_label_is_null() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_message("bare");
    let text = render(None, &[diag]);
    assert!(text.contains("\"section\": null,"));
    assert!(text.contains("\"label\": null,"));
}

#[test]
fn test_internal_error_marks_document_stopped() {
    let diagnostics = [
        Diagnostic::error(ErrorCode::E0001).with_message("one"),
        Diagnostic::error(ErrorCode::E9001).with_message("two"),
    ];
    let text = render(None, &diagnostics);
    assert_eq!(text.matches("\"code\"").count(), 2);
    assert!(text.contains("    },\n    {"));
    assert!(text.contains("\"category\": \"internal\",\n      \"fatal\": true,"));
    assert!(text.contains("\"error_count\": 2,"));
    assert!(text.ends_with("\"stopped\": true\n}\n"));
}

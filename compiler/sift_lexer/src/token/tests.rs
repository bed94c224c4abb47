use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Str,
}

#[test]
fn test_text_defaults_to_lexeme() {
    let token = Token::new(Kind::Str, Section::new(Position::new(2, 3), "\"a\\n\""));
    assert_eq!(token.text, "\"a\\n\"");
    assert_eq!(token.start(), Position::new(2, 3));
}

#[test]
fn test_with_text_keeps_raw_section() {
    let token = Token::new(Kind::Str, Section::new(Position::START, "\"a\\n\"")).with_text("a\n");
    assert_eq!(token.text, "a\n");
    assert_eq!(token.section.text, "\"a\\n\"");
}

#[test]
fn test_display() {
    let token = Token::new(Kind::Str, Section::new(Position::new(1, 4), "\"x\""));
    assert_eq!(token.to_string(), "Str \"\\\"x\\\"\" @ 1:4");
}

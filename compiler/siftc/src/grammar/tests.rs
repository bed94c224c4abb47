use super::*;
use pretty_assertions::assert_eq;
use sift_lexer::{LexError, Position};

fn kinds(input: &str) -> Vec<TokenKind> {
    demo_lexer()
        .tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_keywords_and_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("let letter = fn_name if_ else"),
        vec![Let, Ident, Eq, Ident, Ident, Else]
    );
}

#[test]
fn test_operators_take_longest_spelling() {
    use TokenKind::*;
    assert_eq!(
        kinds("a<=b == c -> !d != -e"),
        vec![Ident, LtEq, Ident, EqEq, Ident, Arrow, Bang, Ident, NotEq, Minus, Ident]
    );
}

#[test]
fn test_numbers() {
    let tokens = demo_lexer().tokenize("12 3.25 4.x").unwrap();
    let texts: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        texts,
        vec![
            (TokenKind::Number, "12"),
            (TokenKind::Number, "3.25"),
            (TokenKind::Number, "4"),
            (TokenKind::Dot, "."),
            (TokenKind::Ident, "x"),
        ]
    );
}

#[test]
fn test_string_value_is_unescaped() {
    let tokens = demo_lexer().tokenize(r#"say("hi\tyou")"#).unwrap();
    let string = &tokens[2];
    assert_eq!(string.kind, TokenKind::Str);
    assert_eq!(string.text, "hi\tyou");
    assert_eq!(string.section.text, r#""hi\tyou""#);
    assert_eq!(string.start(), Position::new(1, 4));
}

#[test]
fn test_unterminated_string_is_a_token() {
    let tokens = demo_lexer().tokenize("x = \"open\ny").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::UnterminatedStr,
            TokenKind::Ident
        ]
    );
    assert_eq!(tokens[2].section.text, "\"open");
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    use TokenKind::*;
    assert_eq!(
        kinds("a / b // trailing comment\n\t c"),
        vec![Ident, Slash, Ident, Ident]
    );
}

#[test]
fn test_positions_follow_lines() {
    let tokens = demo_lexer().tokenize("let x\n  return").unwrap();
    let starts: Vec<Position> = tokens.iter().map(Token::start).collect();
    assert_eq!(
        starts,
        vec![Position::new(1, 0), Position::new(1, 4), Position::new(2, 2)]
    );
}

#[test]
fn test_unknown_character_is_syntax_error() {
    let err = demo_lexer().tokenize("a $$ b").unwrap_err();
    match err {
        LexError::Syntax(err) => {
            assert_eq!(err.section.text, "$$");
            assert_eq!(err.section.column, 2);
        }
        LexError::Stalled(err) => panic!("unexpected stall: {err}"),
    }
}

#[test]
fn test_single_ampersand_is_unmatched() {
    let err = demo_lexer().tokenize("a & b").unwrap_err();
    assert_eq!(err.code(), sift_diagnostic::ErrorCode::E0001);
}

#[test]
fn test_keyword_table_matches_classification() {
    for word in ["let", "fn", "if", "else", "while", "return", "true", "false"] {
        let kind = TokenKind::keyword(word).unwrap();
        assert!(kind.is_keyword(), "{word}");
    }
    assert_eq!(TokenKind::keyword("lets"), None);
    assert!(!TokenKind::Ident.is_keyword());
}

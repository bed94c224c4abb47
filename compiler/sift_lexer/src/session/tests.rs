use crate::{LexError, Lexer, MatcherBuilder};
use pretty_assertions::assert_eq;
use sift_lexer_core::Position;

fn pair_grammar() -> Lexer<String> {
    let mut grammar = MatcherBuilder::new();
    grammar.on('p').action(|ctx, _| {
        ctx.emit("p1".to_string());
        ctx.emit("p2".to_string());
    });
    grammar.when(char::is_alphabetic).emit(|_, c| c.to_string());
    grammar.on(' ').skip();
    Lexer::new(&grammar)
}

#[test]
fn test_parse_once_returns_one_step() {
    let lexer = pair_grammar();
    let mut session = lexer.session("pqr");

    assert_eq!(session.parse_once().unwrap(), vec!["p1", "p2"]);
    assert_eq!(session.position(), Position::new(1, 1));
    assert_eq!(session.cursor().peek(), Some('q'));

    assert_eq!(session.parse_once().unwrap(), vec!["q"]);
    assert_eq!(session.position(), Position::new(1, 2));
}

#[test]
fn test_parse_once_on_skipped_text_is_empty() {
    let lexer = pair_grammar();
    let mut session = lexer.session(" q");
    assert_eq!(session.parse_once().unwrap(), Vec::<String>::new());
    assert!(session.has_next());
}

#[test]
fn test_parse_once_at_end_of_input() {
    let lexer = pair_grammar();
    let mut session = lexer.session("q");
    session.parse_once().unwrap();
    assert!(!session.has_next());
    assert_eq!(session.parse_once().unwrap(), Vec::<String>::new());
}

#[test]
fn test_iterator_yields_tokens_one_by_one() {
    let lexer = pair_grammar();
    let tokens: Result<Vec<String>, LexError> = lexer.session("ap b").collect();
    assert_eq!(tokens.unwrap(), vec!["a", "p1", "p2", "b"]);
}

#[test]
fn test_iterator_resumes_after_syntax_error() {
    let lexer = pair_grammar();
    let items: Vec<_> = lexer.session("a12 b").collect();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Ok("a".to_string()));
    let err = items[1].clone().unwrap_err();
    assert_eq!(err.code(), sift_diagnostic::ErrorCode::E0001);
    assert_eq!(items[2], Ok("b".to_string()));
}

#[test]
fn test_iterator_stops_after_stall() {
    let mut grammar = MatcherBuilder::new();
    grammar.on('a').emit(|_, _| 'a');
    // Root action that never consumes.
    grammar.action(|_, _| {});
    let lexer = Lexer::new(&grammar);

    let mut session = lexer.session("a?a");
    assert_eq!(session.next(), Some(Ok('a')));
    let err = session.next().unwrap().unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(session.next(), None);
    assert_eq!(session.next(), None);
}

#[test]
fn test_session_over_char_iterator() {
    let lexer = pair_grammar();
    let chars = "xy".chars().rev();
    let tokens: Vec<String> = lexer
        .session_chars(chars)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tokens, vec!["y", "x"]);
}

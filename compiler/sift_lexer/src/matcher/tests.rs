use super::*;
use crate::MatcherBuilder;
use pretty_assertions::assert_eq;

fn marker(root: &MatcherNode<u8>) -> Option<u8> {
    let action = root.action()?;
    let mut tokens = Vec::new();
    let mut cursor = Cursor::new("".chars());
    let mut ctx = LexerContext::new(&mut cursor, root, crate::Emit::Buffer(&mut tokens));
    action(&mut ctx, '\0');
    tokens.first().copied()
}

#[test]
fn test_exact_edge_beats_predicate_registered_first() {
    let mut grammar = MatcherBuilder::new();
    grammar.when(|c| c.is_ascii_lowercase()).emit(|_, _| 1);
    grammar.on('q').emit(|_, _| 2);

    let root = grammar.freeze();
    assert_eq!(marker(root.try_match_child('q').unwrap()), Some(2));
    assert_eq!(marker(root.try_match_child('r').unwrap()), Some(1));
}

#[test]
fn test_predicates_tried_in_registration_order() {
    let mut grammar = MatcherBuilder::new();
    grammar.when(|c| c.is_ascii_digit()).emit(|_, _| 1);
    grammar.when(|c| c.is_ascii_hexdigit()).emit(|_, _| 2);

    let root = grammar.freeze();
    assert_eq!(marker(root.try_match_child('7').unwrap()), Some(1));
    assert_eq!(marker(root.try_match_child('f').unwrap()), Some(2));
    assert!(root.try_match_child('g').is_none());
}

#[test]
fn test_descend_takes_deepest_path() {
    let mut grammar = MatcherBuilder::new();
    grammar.on('a').emit(|_, _| 1);
    grammar.on_str("ab").emit(|_, _| 2);
    let root = grammar.freeze();

    let mut cursor = Cursor::new("abc".chars());
    let node = root.descend(&mut cursor);
    assert_eq!(marker(node), Some(2));
    assert_eq!(cursor.peek(), Some('c'));
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn test_descend_does_not_backtrack() {
    let mut grammar = MatcherBuilder::new();
    grammar.on('a').emit(|_, _| 1);
    grammar.on_str("abc").emit(|_, _| 2);
    let root = grammar.freeze();

    let mut cursor = Cursor::new("abx".chars());
    let node = root.descend(&mut cursor);
    assert!(!node.is_terminal());
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn test_descend_stops_at_end_of_input() {
    let mut grammar = MatcherBuilder::new();
    grammar.on_str("ab").emit(|_, _| 1);
    let root = grammar.freeze();

    let mut cursor = Cursor::new("a".chars());
    let node = root.descend(&mut cursor);
    assert!(!node.is_terminal());
    assert!(!cursor.has_next());
}

#[test]
fn test_descend_with_no_match_consumes_nothing() {
    let mut grammar = MatcherBuilder::new();
    grammar.on('a').emit(|_, _| 1);
    let root = grammar.freeze();

    let mut cursor = Cursor::new("z".chars());
    let node = root.descend(&mut cursor);
    assert!(std::ptr::eq(node, &root));
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_predicate_edge_consumes_one_char() {
    let mut grammar = MatcherBuilder::new();
    grammar.when(|c| c.is_ascii_digit()).emit(|_, _| 1);
    let root = grammar.freeze();

    let mut cursor = Cursor::new("42".chars());
    root.descend(&mut cursor);
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn test_debug_lists_sorted_exact_edges() {
    let mut grammar: MatcherBuilder<u8> = MatcherBuilder::new();
    grammar.on('b').skip();
    grammar.on('a').skip();
    let text = format!("{:?}", grammar.freeze());
    let a = text.find("'a'").unwrap();
    let b = text.find("'b'").unwrap();
    assert!(a < b);
}

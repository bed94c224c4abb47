//! The demo grammar bundled with `sift lex`.
//!
//! A small C-like token set: identifiers and keywords, decimal numbers,
//! double-quoted strings, operators and punctuation. Whitespace and `//`
//! comments are skipped.

use std::fmt;

use sift_lexer::{Lexer, LexerContext, MatcherBuilder, Token};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Number,
    Str,
    /// A string literal missing its closing quote on the same line.
    UnterminatedStr,

    // Keywords
    Let,
    Fn,
    If,
    Else,
    While,
    Return,
    True,
    False,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    EqEq,
    Bang,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Arrow,
    AndAnd,
    OrOr,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
}

impl TokenKind {
    /// The keyword spelled `text`, if any.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "let" => Some(TokenKind::Let),
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "return" => Some(TokenKind::Return),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Fn
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Fixed-spelling tokens. Longer spellings share prefixes with shorter
/// ones; the trie picks the longest.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("->", TokenKind::Arrow),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("=", TokenKind::Eq),
    ("==", TokenKind::EqEq),
    ("!", TokenKind::Bang),
    ("!=", TokenKind::NotEq),
    ("<", TokenKind::Lt),
    ("<=", TokenKind::LtEq),
    (">", TokenKind::Gt),
    (">=", TokenKind::GtEq),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (":", TokenKind::Colon),
    (".", TokenKind::Dot),
];

fn identifier(ctx: &mut LexerContext<'_, '_, Token<TokenKind>>, first: char) -> Token<TokenKind> {
    let text = ctx.read_identifier(first);
    ctx.token(TokenKind::keyword(&text).unwrap_or(TokenKind::Ident))
}

fn string(ctx: &mut LexerContext<'_, '_, Token<TokenKind>>, quote: char) -> Token<TokenKind> {
    match ctx.read_string(quote) {
        Some(value) => ctx.token(TokenKind::Str).with_text(value),
        None => {
            debug!(line = ctx.line(), "unterminated string literal");
            ctx.token(TokenKind::UnterminatedStr)
        }
    }
}

/// Register the demo grammar on `grammar`.
pub fn register(grammar: &mut MatcherBuilder<Token<TokenKind>>) {
    for &(spelling, kind) in OPERATORS {
        grammar.on_str(spelling).emit(move |ctx, _| ctx.token(kind));
    }

    grammar.on_str("//").action(|ctx, _| {
        ctx.skip_line();
    });
    grammar.on('"').emit(string);
    grammar
        .when(|c| c.is_alphabetic() || c == '_')
        .emit(identifier);
    grammar.when(|c| c.is_ascii_digit()).emit(|ctx, first| {
        ctx.read_number(first);
        ctx.token(TokenKind::Number)
    });
    grammar.when(char::is_whitespace).action(|ctx, _| {
        ctx.skip_while(char::is_whitespace);
    });
}

/// A lexer for the demo grammar.
pub fn demo_lexer() -> Lexer<Token<TokenKind>> {
    let mut grammar = MatcherBuilder::new();
    register(&mut grammar);
    Lexer::new(&grammar)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

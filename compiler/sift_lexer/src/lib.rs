//! Matcher-trie tokenization engine.
//!
//! A grammar is registered on a mutable [`MatcherBuilder`] tree of exact
//! character edges, predicate edges, and terminal actions, then frozen into
//! an immutable [`MatcherNode`] trie. A [`Lexer`] drives that trie over a
//! character stream:
//!
//! 1. Descend from the root, always following the deepest matching path
//!    (exact edges before predicates, predicates in registration order).
//! 2. Run the reached node's terminal action, which may consume more input
//!    and emit tokens through its [`LexerContext`].
//! 3. If the node has no action, skip to the next plausible token start
//!    (never past a newline) and report a [`SyntaxError`].
//!
//! Every step consumes at least one character; an action that matches but
//! consumes nothing is reported as a [`StallError`] instead of looping.
//!
//! ```text
//! let mut grammar = MatcherBuilder::new();
//! grammar.on('+').emit(|_, _| Tok::Plus);
//! grammar.when(char::is_alphabetic).emit(|ctx, first| Tok::Ident(ctx.read_identifier(first)));
//! let lexer = Lexer::new(&grammar);
//! let tokens = lexer.tokenize("a+b")?;
//! ```

mod builder;
mod context;
mod error;
mod lexer;
mod matcher;
mod session;
mod token;

pub use builder::MatcherBuilder;
pub use context::{Emit, LexerContext};
pub use error::{LexError, StallError, SyntaxError};
pub use lexer::Lexer;
pub use matcher::{Action, MatcherNode, Predicate};
pub use session::Session;
pub use token::Token;

pub use sift_lexer_core::{Cursor, Position, Section, Source};

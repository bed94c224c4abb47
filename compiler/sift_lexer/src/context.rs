//! The context terminal actions run in.
//!
//! [`LexerContext`] borrows the session's cursor and the trie root for the
//! length of one action call. Cursor operations are forwarded unchanged;
//! emission goes to whichever [`Emit`] sink the current step was started
//! with, so whole-stream and single-step parsing share every action.

mod readers;

use sift_lexer_core::{Cursor, Position, Section};

use crate::lexer::step;
use crate::{LexError, MatcherNode, Token};

/// Where emitted tokens go.
pub enum Emit<'a, T> {
    /// Hand each token to a caller callback, in document order.
    Stream(&'a mut dyn FnMut(T)),
    /// Collect tokens for the step that is running.
    Buffer(&'a mut Vec<T>),
}

impl<T> Emit<'_, T> {
    /// A sink with a shorter borrow that writes to the same place.
    pub fn reborrow(&mut self) -> Emit<'_, T> {
        match self {
            Emit::Stream(sink) => Emit::Stream(&mut **sink),
            Emit::Buffer(tokens) => Emit::Buffer(&mut **tokens),
        }
    }

    #[inline]
    fn push(&mut self, token: T) {
        match self {
            Emit::Stream(sink) => (*sink)(token),
            Emit::Buffer(tokens) => tokens.push(token),
        }
    }
}

/// Live lexing context handed to terminal actions.
pub struct LexerContext<'a, 'src, T> {
    cursor: &'a mut Cursor<'src>,
    root: &'a MatcherNode<T>,
    sink: Emit<'a, T>,
}

impl<'a, 'src, T> LexerContext<'a, 'src, T> {
    pub(crate) fn new(
        cursor: &'a mut Cursor<'src>,
        root: &'a MatcherNode<T>,
        sink: Emit<'a, T>,
    ) -> Self {
        LexerContext { cursor, root, sink }
    }

    /// Emit a token to the active sink.
    pub fn emit(&mut self, token: T) {
        self.sink.push(token);
    }

    /// Run one nested step from the trie root over the same cursor and
    /// return the tokens it emitted, without forwarding them to this
    /// context's sink.
    ///
    /// The nested step starts a new step on the cursor: afterwards
    /// [`lexeme`](Self::lexeme) and [`consumed`](Self::consumed) describe
    /// the nested match only. At end of input this returns no tokens.
    pub fn parse_once(&mut self) -> Result<Vec<T>, LexError> {
        let mut tokens = Vec::new();
        step(self.root, &mut *self.cursor, Emit::Buffer(&mut tokens))?;
        Ok(tokens)
    }

    /// Build a [`Token`] from the text consumed in the current step.
    pub fn token<K>(&self, kind: K) -> Token<K> {
        Token::new(kind, self.cursor.section())
    }

    /// Direct access to the underlying cursor.
    pub fn cursor(&mut self) -> &mut Cursor<'src> {
        self.cursor
    }

    // === Cursor forwarding ===

    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.cursor.peek()
    }

    #[inline]
    pub fn peek_nth(&mut self, distance: usize) -> Option<char> {
        self.cursor.peek_nth(distance)
    }

    pub fn peek_run(&mut self, len: usize) -> String {
        self.cursor.peek_run(len)
    }

    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    pub fn at_str(&mut self, expect: &str) -> bool {
        self.cursor.at_str(expect)
    }

    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    pub fn advance_run(&mut self, len: usize) -> String {
        self.cursor.advance_run(len)
    }

    #[inline]
    pub fn eat(&mut self, expect: char) -> bool {
        self.cursor.eat(expect)
    }

    pub fn eat_str(&mut self, expect: &str) -> bool {
        self.cursor.eat_str(expect)
    }

    pub fn eat_while(&mut self, pred: impl FnMut(char) -> bool) -> usize {
        self.cursor.eat_while(pred)
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn last(&self) -> Option<char> {
        self.cursor.last()
    }

    pub fn consumed(&self) -> usize {
        self.cursor.consumed()
    }

    pub fn lexeme(&self) -> &str {
        self.cursor.lexeme()
    }

    pub fn section(&self) -> Section {
        self.cursor.section()
    }
}

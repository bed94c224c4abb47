//! Step-at-a-time lexing.

use std::collections::VecDeque;

use sift_lexer_core::{Cursor, Position};

use crate::lexer::step;
use crate::{Emit, LexError, MatcherNode};

/// A lexing session that runs one step per call.
///
/// Owns its cursor, so the character stream is released when the session
/// is dropped. As an [`Iterator`], yields tokens one at a time, running
/// steps as needed; a syntax error is yielded in place and iteration
/// resumes after the skipped text. Iteration ends for good after a stall.
pub struct Session<'l, 'src, T> {
    root: &'l MatcherNode<T>,
    cursor: Cursor<'src>,
    /// Tokens from the last step not yet yielded by `next()`.
    pending: VecDeque<T>,
    stalled: bool,
}

impl<'l, 'src, T> Session<'l, 'src, T> {
    pub(crate) fn new(root: &'l MatcherNode<T>, cursor: Cursor<'src>) -> Self {
        Session {
            root,
            cursor,
            pending: VecDeque::new(),
            stalled: false,
        }
    }

    /// Run exactly one step and return the tokens it emitted, in order.
    ///
    /// Leaves the cursor just after that step's match. Returns no tokens at
    /// end of input. Tokens still buffered for the iterator are not
    /// included.
    pub fn parse_once(&mut self) -> Result<Vec<T>, LexError> {
        let mut tokens = Vec::new();
        step(self.root, &mut self.cursor, Emit::Buffer(&mut tokens))?;
        Ok(tokens)
    }

    pub fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn cursor(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }
}

impl<T> Iterator for Session<'_, '_, T> {
    type Item = Result<T, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.stalled || !self.cursor.has_next() {
                return None;
            }
            match self.parse_once() {
                Ok(tokens) => self.pending.extend(tokens),
                Err(err) => {
                    self.stalled = err.is_fatal();
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T> std::iter::FusedIterator for Session<'_, '_, T> {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

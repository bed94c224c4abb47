//! Lookahead cursor over a character stream.
//!
//! The cursor owns its character source and keeps a small ring buffer
//! (the lookahead window) of characters pulled from it but not yet consumed.
//! Lookahead (`peek*`) only ever fills the window; it never changes the
//! position, the per-step counter, or the last consumed character. Any
//! number of lookaheads, nested or not, compose because consumption always
//! pops from the front of the same window.
//!
//! # Steps
//!
//! The tokenization engine calls [`Cursor::begin_step()`] at the start of
//! every step. That resets the per-step consumed counter and the step's
//! lexeme, and records the step's start position. [`Cursor::section()`]
//! describes everything consumed since.

use std::collections::VecDeque;
use std::fmt;

use crate::{Position, Section};

/// Default lookahead window capacity. Grows on demand.
const DEFAULT_LOOKAHEAD: usize = 8;

/// Lookahead/consumption cursor over a character stream.
///
/// Owns the stream: dropping the cursor releases it, whichever way the
/// lexing session ends. Not `Sync`; a cursor belongs to one session.
pub struct Cursor<'src> {
    /// Underlying character source.
    chars: Box<dyn Iterator<Item = char> + 'src>,
    /// Characters pulled from `chars` but not yet consumed.
    window: VecDeque<char>,
    /// Set once `chars` has returned `None`.
    drained: bool,
    /// Position of the next unconsumed character.
    pos: Position,
    /// Total characters consumed.
    offset: usize,
    /// Characters consumed since the last `begin_step()`.
    consumed: usize,
    /// Most recently consumed character.
    last: Option<char>,
    /// Text consumed since the last `begin_step()`.
    lexeme: String,
    /// Position at the last `begin_step()`.
    step_start: Position,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at line 1, column 0 over `chars`.
    pub fn new<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'src,
    {
        Self::with_lookahead(chars, DEFAULT_LOOKAHEAD)
    }

    /// Create a cursor whose lookahead window is pre-sized for `capacity`
    /// characters. Deeper lookahead still works; the window grows.
    pub fn with_lookahead<I>(chars: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'src,
    {
        Cursor {
            chars: Box::new(chars.into_iter()),
            window: VecDeque::with_capacity(capacity),
            drained: false,
            pos: Position::START,
            offset: 0,
            consumed: 0,
            last: None,
            lexeme: String::new(),
            step_start: Position::START,
        }
    }

    /// Pull characters into the window until it holds `len` of them or the
    /// source is exhausted. Returns `true` if the window holds `len`.
    fn fill(&mut self, len: usize) -> bool {
        while self.window.len() < len && !self.drained {
            match self.chars.next() {
                Some(c) => self.window.push_back(c),
                None => self.drained = true,
            }
        }
        self.window.len() >= len
    }

    // === Lookahead ===

    /// The next unconsumed character, or `None` at end of input.
    ///
    /// Idempotent: repeated calls without an intervening consumption return
    /// the same value and leave every observable cursor state unchanged.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.peek_nth(0)
    }

    /// The character `distance` positions ahead (0 = next character), or
    /// `None` if fewer than `distance + 1` characters remain.
    pub fn peek_nth(&mut self, distance: usize) -> Option<char> {
        let Some(len) = distance.checked_add(1) else {
            return None;
        };
        if self.fill(len) {
            self.window.get(distance).copied()
        } else {
            None
        }
    }

    /// Up to `len` upcoming characters. Shorter (possibly empty) at end of
    /// input.
    pub fn peek_run(&mut self, len: usize) -> String {
        self.fill(len);
        self.window.iter().take(len).collect()
    }

    /// Returns `true` if at least one unconsumed character remains.
    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.fill(1)
    }

    /// Returns `true` if the upcoming characters are exactly `expect`.
    pub fn at_str(&mut self, expect: &str) -> bool {
        expect
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_nth(i) == Some(c))
    }

    // === Consumption ===

    /// Consume and return one character, or `None` at end of input.
    ///
    /// Counts toward the current step. A `'\n'` advances the line and resets
    /// the column to 0; any other character advances the column.
    pub fn advance(&mut self) -> Option<char> {
        if !self.fill(1) {
            return None;
        }
        let c = self.window.pop_front()?;

        self.consumed += 1;
        self.offset += 1;
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 0;
        } else {
            self.pos.column += 1;
        }
        self.last = Some(c);
        self.lexeme.push(c);
        Some(c)
    }

    /// Consume up to `len` characters (fewer if input runs out first) and
    /// return them.
    pub fn advance_run(&mut self, len: usize) -> String {
        // Sized by what is already buffered; `len` may far exceed the input.
        let mut run = String::with_capacity(len.min(self.window.len()));
        for _ in 0..len {
            match self.advance() {
                Some(c) => run.push(c),
                None => break,
            }
        }
        run
    }

    /// Consume the next character iff it equals `expect`.
    ///
    /// Consumes nothing on a `false` result.
    pub fn eat(&mut self, expect: char) -> bool {
        if self.peek() == Some(expect) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `expect` iff the upcoming characters are exactly `expect`.
    ///
    /// All-or-nothing: consumes nothing on a `false` result.
    pub fn eat_str(&mut self, expect: &str) -> bool {
        if !self.at_str(expect) {
            return false;
        }
        for _ in expect.chars() {
            self.advance();
        }
        true
    }

    /// Consume characters while `pred` holds for the next one. Returns the
    /// number consumed.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    // === Steps ===

    /// Start a new tokenization step.
    ///
    /// Resets the per-step counter and lexeme and records the current
    /// position as the step start. Line, column, offset, and the last
    /// consumed character are untouched.
    pub fn begin_step(&mut self) {
        self.consumed = 0;
        self.lexeme.clear();
        self.step_start = self.pos;
    }

    /// Characters consumed in the current step.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Text consumed in the current step.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Position where the current step started.
    pub fn step_start(&self) -> Position {
        self.step_start
    }

    /// Section covering everything consumed in the current step.
    pub fn section(&self) -> Section {
        Section::new(self.step_start, self.lexeme.as_str())
    }

    // === Position ===

    /// Position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    /// Current 0-based column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Total characters consumed since the cursor was created.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The most recently consumed character, if any.
    #[inline]
    pub fn last(&self) -> Option<char> {
        self.last
    }

    /// Number of characters currently buffered for lookahead.
    pub fn lookahead_len(&self) -> usize {
        self.window.len()
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("offset", &self.offset)
            .field("consumed", &self.consumed)
            .field("last", &self.last)
            .field("window", &self.window)
            .field("drained", &self.drained)
            .finish_non_exhaustive()
    }
}

//! Tokenization engine.
//!
//! One step: descend the trie from the root, then either run the reached
//! node's action or recover and report unmatched input. [`Lexer`] repeats
//! steps over a whole stream; [`Session`] exposes them one at a time.

use std::fmt;
use std::sync::Arc;

use sift_lexer_core::{Cursor, Source};
use tracing::{debug, trace};

use crate::{
    Emit, LexError, LexerContext, MatcherBuilder, MatcherNode, Session, StallError, SyntaxError,
};

/// Run one tokenization step at the cursor.
///
/// A no-op at end of input. Otherwise the step consumes at least one
/// character whether it succeeds or fails, except when it fails with a
/// [`StallError`].
pub(crate) fn step<T>(
    root: &MatcherNode<T>,
    cursor: &mut Cursor<'_>,
    mut sink: Emit<'_, T>,
) -> Result<(), LexError> {
    if !cursor.has_next() {
        return Ok(());
    }
    cursor.begin_step();
    let start = cursor.position();

    let node = root.descend(cursor);
    trace!(
        line = start.line,
        column = start.column,
        consumed = cursor.consumed(),
        terminal = node.is_terminal(),
        "descend"
    );

    let Some(action) = node.action() else {
        recover(root, cursor);
        let section = cursor.section();
        debug!(
            line = section.line,
            column = section.column,
            text = %section.text,
            "no matcher, recovered"
        );
        return Err(SyntaxError::no_matcher(section).into());
    };

    // A root action sees the previous step's last character, or NUL if
    // nothing has been consumed yet.
    let last = cursor.last().unwrap_or('\0');
    {
        let mut ctx = LexerContext::new(&mut *cursor, root, sink.reborrow());
        action(&mut ctx, last);
    }

    if cursor.consumed() == 0 {
        return Err(StallError { position: start }.into());
    }
    Ok(())
}

/// Skip to the next plausible token start after a failed descent.
///
/// Stops before a character that has an edge from the root, or before a
/// newline. Takes at least one character when the step has consumed none,
/// so a caller that resumes after the error always makes progress.
fn recover<T>(root: &MatcherNode<T>, cursor: &mut Cursor<'_>) {
    if cursor.consumed() == 0 {
        cursor.advance();
    }
    while let Some(c) = cursor.peek() {
        if c == '\n' || root.try_match_child(c).is_some() {
            break;
        }
        cursor.advance();
    }
}

/// A tokenizer over a frozen matcher trie.
///
/// Cheap to clone: clones share the trie.
pub struct Lexer<T> {
    root: Arc<MatcherNode<T>>,
}

impl<T> Lexer<T> {
    /// Freeze `grammar` into a new lexer.
    pub fn new(grammar: &MatcherBuilder<T>) -> Self {
        Self::from_root(grammar.freeze())
    }

    pub fn from_root(root: MatcherNode<T>) -> Self {
        Lexer {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &MatcherNode<T> {
        &self.root
    }

    /// Lex all of `text`, handing each token to `output` in document order.
    ///
    /// Stops at the first error. Tokens emitted before it have already been
    /// delivered.
    pub fn parse(&self, text: &str, output: impl FnMut(T)) -> Result<(), LexError> {
        self.parse_chars(text.chars(), output)
    }

    /// Like [`parse`](Self::parse), over any character stream.
    pub fn parse_chars<'src, I>(&self, chars: I, mut output: impl FnMut(T)) -> Result<(), LexError>
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'src,
    {
        let mut cursor = Cursor::new(chars);
        self.parse_cursor(&mut cursor, &mut output)
    }

    pub fn parse_source(&self, source: &Source, output: impl FnMut(T)) -> Result<(), LexError> {
        self.parse(source.content(), output)
    }

    /// Lex the rest of `cursor`'s stream.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_cursor(
        &self,
        cursor: &mut Cursor<'_>,
        output: &mut dyn FnMut(T),
    ) -> Result<(), LexError> {
        while cursor.has_next() {
            step(&self.root, cursor, Emit::Stream(&mut *output))?;
        }
        Ok(())
    }

    /// Lex all of `text` into a vector.
    pub fn tokenize(&self, text: &str) -> Result<Vec<T>, LexError> {
        let mut tokens = Vec::new();
        self.parse(text, |token| tokens.push(token))?;
        Ok(tokens)
    }

    /// Start a step-at-a-time session over `text`.
    pub fn session<'src>(&self, text: &'src str) -> Session<'_, 'src, T> {
        self.session_chars(text.chars())
    }

    pub fn session_chars<'src, I>(&self, chars: I) -> Session<'_, 'src, T>
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'src,
    {
        Session::new(&self.root, Cursor::new(chars))
    }
}

impl<T> Clone for Lexer<T> {
    fn clone(&self) -> Self {
        Lexer {
            root: Arc::clone(&self.root),
        }
    }
}

impl<T> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("nodes", &self.root.node_count())
            .finish()
    }
}

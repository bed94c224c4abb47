//! Frozen matcher trie.
//!
//! A [`MatcherNode`] is the read-only result of
//! [`MatcherBuilder::freeze`](crate::MatcherBuilder::freeze). Nodes carry
//! exact character edges, an ordered list of predicate edges, and an
//! optional terminal action. The trie is shared by reference between every
//! lexing run, so nothing here takes `&mut self`.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use sift_lexer_core::Cursor;

use crate::LexerContext;

/// Character class test on a predicate edge.
pub type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Terminal action: runs with the live context and the last consumed
/// character once descent stops at its node.
pub type Action<T> = Arc<dyn Fn(&mut LexerContext<'_, '_, T>, char) + Send + Sync>;

/// One node of a frozen matcher trie.
pub struct MatcherNode<T> {
    pub(crate) exact: FxHashMap<char, MatcherNode<T>>,
    pub(crate) predicates: Vec<(Predicate, MatcherNode<T>)>,
    pub(crate) action: Option<Action<T>>,
}

impl<T> MatcherNode<T> {
    /// A node with no edges and no action. Lexing with it as the root
    /// reports every character as unrecognized.
    pub fn empty() -> Self {
        MatcherNode {
            exact: FxHashMap::default(),
            predicates: Vec::new(),
            action: None,
        }
    }

    /// The child reached by `c`, if any.
    ///
    /// An exact edge wins over any predicate, regardless of registration
    /// order. Otherwise predicates are tried in the order they were
    /// registered and the first that accepts `c` wins.
    #[inline]
    pub fn try_match_child(&self, c: char) -> Option<&MatcherNode<T>> {
        if let Some(child) = self.exact.get(&c) {
            return Some(child);
        }
        self.predicates
            .iter()
            .find(|(accepts, _)| accepts(c))
            .map(|(_, child)| child)
    }

    /// Follow matching edges from this node, consuming one character per
    /// edge, until the next character has no edge or the stream ends.
    ///
    /// Returns the deepest node reached. There is no backtracking: if that
    /// node has no action the characters stay consumed.
    pub fn descend<'n>(&'n self, cursor: &mut Cursor<'_>) -> &'n MatcherNode<T> {
        let mut node = self;
        while let Some(c) = cursor.peek() {
            let Some(child) = node.try_match_child(c) else {
                break;
            };
            cursor.advance();
            node = child;
        }
        node
    }

    pub fn action(&self) -> Option<&Action<T>> {
        self.action.as_ref()
    }

    /// Whether reaching this node completes a token.
    pub fn is_terminal(&self) -> bool {
        self.action.is_some()
    }

    /// Whether this node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.exact.is_empty() && self.predicates.is_empty()
    }

    /// Number of outgoing edges (exact and predicate).
    pub fn edge_count(&self) -> usize {
        self.exact.len() + self.predicates.len()
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.exact.values().map(MatcherNode::node_count).sum::<usize>()
            + self
                .predicates
                .iter()
                .map(|(_, child)| child.node_count())
                .sum::<usize>()
    }
}

impl<T> Default for MatcherNode<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for MatcherNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut exact: Vec<(&char, &MatcherNode<T>)> = self.exact.iter().collect();
        exact.sort_unstable_by_key(|(c, _)| **c);
        f.debug_struct("MatcherNode")
            .field("terminal", &self.is_terminal())
            .field("exact", &exact)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

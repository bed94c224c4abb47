//! Mutable matcher tree used while registering a grammar.
//!
//! Registration walks or extends a path of edges and ends by attaching a
//! terminal action. Paths that never receive an action are dropped when the
//! tree is frozen, so the frozen trie only contains reachable tokens.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::matcher::{Action, MatcherNode, Predicate};
use crate::LexerContext;

/// Builder for one node of a matcher tree.
///
/// Edge methods return the child builder, so a token is registered by
/// chaining from the root:
///
/// ```text
/// grammar.on_str("==").emit(|_, _| Tok::EqEq);
/// grammar.when(char::is_numeric).emit(|ctx, c| Tok::Int(ctx.read_number(c)));
/// ```
pub struct MatcherBuilder<T> {
    exact: FxHashMap<char, MatcherBuilder<T>>,
    predicates: Vec<(Predicate, MatcherBuilder<T>)>,
    action: Option<Action<T>>,
}

impl<T> MatcherBuilder<T> {
    pub fn new() -> Self {
        MatcherBuilder {
            exact: FxHashMap::default(),
            predicates: Vec::new(),
            action: None,
        }
    }

    /// The child for exact character `c`, created if absent.
    pub fn on(&mut self, c: char) -> &mut Self {
        self.exact.entry(c).or_insert_with(Self::new)
    }

    /// Follow (or create) one exact edge per character of `text`.
    ///
    /// An empty `text` returns `self`.
    pub fn on_str(&mut self, text: &str) -> &mut Self {
        text.chars().fold(self, MatcherBuilder::on)
    }

    /// Add a predicate edge and return its child.
    ///
    /// Predicates have no identity, so every call adds a new edge. They are
    /// tried after exact edges, in the order they were added.
    pub fn when(&mut self, accepts: impl Fn(char) -> bool + Send + Sync + 'static) -> &mut Self {
        let index = self.predicates.len();
        self.predicates.push((Arc::new(accepts), Self::new()));
        &mut self.predicates[index].1
    }

    /// Set this node's terminal action, replacing any previous one.
    pub fn action(
        &mut self,
        action: impl Fn(&mut LexerContext<'_, '_, T>, char) + Send + Sync + 'static,
    ) -> &mut Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Terminal action that emits the token built by `make`.
    pub fn emit(
        &mut self,
        make: impl Fn(&mut LexerContext<'_, '_, T>, char) -> T + Send + Sync + 'static,
    ) -> &mut Self {
        self.action(move |ctx, last| {
            let token = make(ctx, last);
            ctx.emit(token);
        })
    }

    /// Terminal action that discards the matched text.
    pub fn skip(&mut self) -> &mut Self {
        self.action(|_, _| {})
    }

    pub fn is_terminal(&self) -> bool {
        self.action.is_some()
    }

    /// Whether no action is reachable from this node.
    pub fn is_dead(&self) -> bool {
        self.action.is_none()
            && self.exact.values().all(MatcherBuilder::is_dead)
            && self.predicates.iter().all(|(_, child)| child.is_dead())
    }

    /// Snapshot this tree into an immutable trie.
    ///
    /// Subtrees without a reachable action are pruned. The builder is left
    /// untouched and can keep growing; later registrations do not affect
    /// tries frozen earlier.
    pub fn freeze(&self) -> MatcherNode<T> {
        self.freeze_live().unwrap_or_else(MatcherNode::empty)
    }

    fn freeze_live(&self) -> Option<MatcherNode<T>> {
        let exact: FxHashMap<char, MatcherNode<T>> = self
            .exact
            .iter()
            .filter_map(|(&c, child)| child.freeze_live().map(|node| (c, node)))
            .collect();
        let predicates: Vec<(Predicate, MatcherNode<T>)> = self
            .predicates
            .iter()
            .filter_map(|(accepts, child)| {
                child
                    .freeze_live()
                    .map(|node| (Arc::clone(accepts), node))
            })
            .collect();

        if self.action.is_none() && exact.is_empty() && predicates.is_empty() {
            return None;
        }
        Some(MatcherNode {
            exact,
            predicates,
            action: self.action.clone(),
        })
    }
}

impl<T> Default for MatcherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-node side tables keyed by node identity
//!
//! Passes must not write computed results into the tree; a pass that needs
//! to record something per node (an inferred type, a constant value) stores
//! it here, keyed by the address of the borrowed node. The borrow tied to
//! `'ast` guarantees the tree outlives the map, so an address uniquely
//! identifies one node for the map's whole lifetime.

use super::LocatedExpr;
use std::collections::HashMap;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeKey(usize);

impl NodeKey {
    fn of(expr: &LocatedExpr) -> Self {
        NodeKey(expr as *const LocatedExpr as usize)
    }
}

/// External mapping from AST nodes to pass-computed values
#[derive(Debug)]
pub struct NodeMap<'ast, T> {
    entries: HashMap<NodeKey, T>,
    _tree: PhantomData<&'ast LocatedExpr>,
}

impl<'ast, T> NodeMap<'ast, T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _tree: PhantomData,
        }
    }

    /// Record a value for a node, returning the previous one if any
    pub fn insert(&mut self, expr: &'ast LocatedExpr, value: T) -> Option<T> {
        self.entries.insert(NodeKey::of(expr), value)
    }

    pub fn get(&self, expr: &'ast LocatedExpr) -> Option<&T> {
        self.entries.get(&NodeKey::of(expr))
    }

    pub fn contains(&self, expr: &'ast LocatedExpr) -> bool {
        self.entries.contains_key(&NodeKey::of(expr))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'ast, T> Default for NodeMap<'ast, T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Reachability marking for an external garbage collector.
//!
//! The collector owns the mark bits and the sweep policy. This module only
//! defines how a tree's ownership edges are traversed: [`mark`] hands every
//! node reachable from a root to a [`Collector`] exactly once per pass.
//!
//! ```
//! use calc_core::ast::{ExprArena, ExprBuilder};
//! use calc_core::gc::{MarkSet, mark};
//!
//! let arena = ExprArena::new();
//! let b = ExprBuilder::new(&arena);
//! let root = b.neg(b.add(b.int(1, None), b.error(), None), None);
//!
//! let mut marks = MarkSet::new();
//! mark(&mut marks, root);
//! assert_eq!(marks.len(), 4);
//! ```

use alloc::vec;

use hashbrown::HashSet;

use crate::ast::Expr;

/// Mark bits of a collection pass.
pub trait Collector {
    /// Set the mark of `expr`.
    ///
    /// Returns `true` if the node was unmarked, `false` if it was already
    /// marked earlier in this pass.
    fn mark_node(&mut self, expr: &Expr<'_>) -> bool;
}

/// Mark `root` and every node it owns, transitively.
///
/// Subtrees whose root is already marked are skipped, so the error node can
/// appear any number of times and is still visited once. Traversal uses an
/// explicit work list and does not recurse on the native stack.
pub fn mark<C: Collector + ?Sized>(collector: &mut C, root: &Expr<'_>) {
    let mut pending = vec![root];
    while let Some(expr) = pending.pop() {
        if collector.mark_node(expr) {
            pending.extend(expr.children());
        }
    }
}

/// A [`Collector`] that records marked nodes by address.
#[derive(Debug, Default)]
pub struct MarkSet {
    marked: HashSet<*const ()>,
}

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_marked(&self, expr: &Expr<'_>) -> bool {
        self.marked.contains(&key(expr))
    }

    /// Number of distinct nodes marked in this pass.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Forget all marks, ready for the next pass.
    pub fn clear(&mut self) {
        self.marked.clear();
    }
}

impl Collector for MarkSet {
    fn mark_node(&mut self, expr: &Expr<'_>) -> bool {
        self.marked.insert(key(expr))
    }
}

fn key(expr: &Expr<'_>) -> *const () {
    expr.as_ptr().cast()
}

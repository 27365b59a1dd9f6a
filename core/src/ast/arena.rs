use core::fmt;

use bumpalo::Bump;
use dashu::integer::IBig;
use typed_arena::Arena;

use super::{Expr, ExprInner, Span};

/// Owns the nodes and literal values of expression trees.
///
/// Nodes live in a bump arena and are never dropped one by one. Literal
/// values may own heap digits, so they are kept in a typed arena that runs
/// their destructors. Dropping the `ExprArena` releases both.
pub struct ExprArena {
    nodes: Bump,
    literals: Arena<IBig>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self {
            nodes: Bump::new(),
            literals: Arena::new(),
        }
    }

    pub(super) fn alloc_expr<'a>(&'a self, span: Option<Span>, inner: ExprInner<'a>) -> &'a Expr<'a> {
        self.nodes.alloc(Expr::new(span, inner))
    }

    pub(super) fn alloc_literal(&self, value: IBig) -> &IBig {
        self.literals.alloc(value)
    }

    /// Number of literal values allocated so far.
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }
}

impl Default for ExprArena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("node_bytes", &self.nodes.allocated_bytes())
            .field("literals", &self.literals.len())
            .finish()
    }
}

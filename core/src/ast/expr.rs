use dashu::integer::IBig;

use super::{BinaryOp, Kind, Span, UnaryOp, get_node_name};

/// An expression node.
///
/// Nodes are immutable once built. Children are references into the arena
/// the tree was built in (see [`ExprBuilder`](super::ExprBuilder)), except
/// for error placeholders, which all point at the process-wide node returned
/// by [`get_error`].
#[derive(PartialEq)]
pub struct Expr<'a> {
    span: Option<Span>,
    inner: ExprInner<'a>,
}

/// The operator-specific payload of a node.
///
/// The variant fixes the node's [`Kind`] and arity, so a unary node can never
/// carry two children.
#[derive(Debug, PartialEq)]
pub enum ExprInner<'a> {
    Error,
    Int(&'a IBig),
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Unary {
        op: UnaryOp,
        operand: &'a Expr<'a>,
    },
}

static ERROR: Expr<'static> = Expr {
    span: None,
    inner: ExprInner::Error,
};

/// The canonical error node.
///
/// Every call returns the same instance, so consumers can suppress
/// duplicate diagnostics with [`core::ptr::eq`].
pub fn get_error() -> &'static Expr<'static> {
    &ERROR
}

impl<'a> Expr<'a> {
    pub(crate) fn new(span: Option<Span>, inner: ExprInner<'a>) -> Self {
        Self { span, inner }
    }

    pub fn kind(&self) -> Kind {
        match &self.inner {
            ExprInner::Error => Kind::Error,
            ExprInner::Int(_) => Kind::Int,
            ExprInner::Binary { op, .. } => op.kind(),
            ExprInner::Unary { op, .. } => op.kind(),
        }
    }

    pub fn node_name(&self) -> &'static str {
        get_node_name(self.kind())
    }

    /// Source location, `None` when unknown.
    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn inner(&self) -> &ExprInner<'a> {
        &self.inner
    }

    pub fn as_ptr(&self) -> *const Self {
        self as *const _
    }

    /// True for the canonical error node.
    pub fn is_error(&self) -> bool {
        matches!(self.inner, ExprInner::Error)
    }

    pub fn value(&self) -> Option<&'a IBig> {
        match self.inner {
            ExprInner::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<&'a Expr<'a>> {
        match self.inner {
            ExprInner::Binary { left, .. } => Some(left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&'a Expr<'a>> {
        match self.inner {
            ExprInner::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    pub fn operand(&self) -> Option<&'a Expr<'a>> {
        match self.inner {
            ExprInner::Unary { operand, .. } => Some(operand),
            _ => None,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &'a Expr<'a>> + use<'a> {
        let (first, second) = match self.inner {
            ExprInner::Error | ExprInner::Int(_) => (None, None),
            ExprInner::Binary { left, right, .. } => (Some(left), Some(right)),
            ExprInner::Unary { operand, .. } => (Some(operand), None),
        };
        first.into_iter().chain(second)
    }
}

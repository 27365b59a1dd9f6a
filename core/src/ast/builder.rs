//! Arena-backed construction of expression trees.

use dashu::integer::IBig;

use super::{BinaryOp, Expr, ExprArena, ExprInner, Span, UnaryOp, get_error};

/// Allocates expression nodes in an [`ExprArena`].
///
/// The arena owns every node it hands out; dropping it releases the whole
/// tree at once, literal digits included. Each constructor fixes the node
/// kind, so callers only supply the children and an optional source location.
///
/// ```
/// use calc_core::ast::{ExprArena, ExprBuilder, Span};
///
/// let arena = ExprArena::new();
/// let b = ExprBuilder::new(&arena);
/// let expr = b.add(b.int(2, Some(Span::new(0, 1))), b.int(3, Some(Span::new(4, 5))), Some(Span::new(0, 5)));
/// assert_eq!(expr.node_name(), "add-expression");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct ExprBuilder<'a> {
    arena: &'a ExprArena,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(arena: &'a ExprArena) -> Self {
        Self { arena }
    }

    fn alloc(self, span: Option<Span>, inner: ExprInner<'a>) -> &'a Expr<'a> {
        self.arena.alloc_expr(span, inner)
    }

    /// The canonical error node. Nothing is allocated.
    pub fn error(self) -> &'a Expr<'a> {
        get_error()
    }

    pub fn int(self, value: impl Into<IBig>, span: Option<Span>) -> &'a Expr<'a> {
        let value = self.arena.alloc_literal(value.into());
        self.alloc(span, ExprInner::Int(value))
    }

    pub fn binary(
        self,
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
        span: Option<Span>,
    ) -> &'a Expr<'a> {
        self.alloc(span, ExprInner::Binary { op, left, right })
    }

    pub fn unary(self, op: UnaryOp, operand: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.alloc(span, ExprInner::Unary { op, operand })
    }

    pub fn add(self, left: &'a Expr<'a>, right: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.binary(BinaryOp::Add, left, right, span)
    }

    pub fn sub(self, left: &'a Expr<'a>, right: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.binary(BinaryOp::Sub, left, right, span)
    }

    pub fn mul(self, left: &'a Expr<'a>, right: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.binary(BinaryOp::Mul, left, right, span)
    }

    pub fn div(self, left: &'a Expr<'a>, right: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.binary(BinaryOp::Div, left, right, span)
    }

    /// Remainder node (`%`).
    pub fn modulo(
        self,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
        span: Option<Span>,
    ) -> &'a Expr<'a> {
        self.binary(BinaryOp::Mod, left, right, span)
    }

    pub fn neg(self, operand: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.unary(UnaryOp::Neg, operand, span)
    }

    pub fn pos(self, operand: &'a Expr<'a>, span: Option<Span>) -> &'a Expr<'a> {
        self.unary(UnaryOp::Pos, operand, span)
    }
}

//! Text renderings of expression trees.
//!
//! - [`print`]: infix notation with the minimal parentheses needed to keep
//!   the tree shape. Also used by `Display`.
//! - [`debug`]: a tagged s-expression dump using node names. Also used by
//!   `Debug`.
//!
//! Both are deterministic and only read the tree.

use alloc::{string::String, vec};
use core::fmt::{self, Write};

use dashu::integer::IBig;

use crate::ast::{BinaryOp, Expr, ExprInner, Span, UnaryOp};

/// Render `expr` in infix notation.
pub fn print(expr: &Expr<'_>) -> String {
    let mut output = String::new();
    let _ = InfixFormatter { output: &mut output }.write_expr(expr, 0);
    output
}

/// Render `expr` as a tagged s-expression.
pub fn debug(expr: &Expr<'_>) -> String {
    let mut output = String::new();
    let _ = TreeFormatter { output: &mut output }.write_expr(expr);
    output
}

/// Writes infix notation.
struct InfixFormatter<'w, W: Write> {
    output: &'w mut W,
}

/// Pending output of an [`InfixFormatter`], popped last-in first-out.
enum InfixStep<'e> {
    Expr(&'e Expr<'e>, u8),
    Operator(BinaryOp),
    CloseParen,
}

impl<W: Write> InfixFormatter<'_, W> {
    /// Write `root` and everything below it.
    ///
    /// `min_prec` is the weakest operator that may appear unparenthesized at
    /// the position of `root`.
    fn write_expr(&mut self, root: &Expr<'_>, min_prec: u8) -> fmt::Result {
        let mut pending = vec![InfixStep::Expr(root, min_prec)];
        while let Some(step) = pending.pop() {
            let (expr, min_prec) = match step {
                InfixStep::Expr(expr, min_prec) => (expr, min_prec),
                InfixStep::Operator(op) => {
                    write!(self.output, " {} ", op.symbol())?;
                    continue;
                }
                InfixStep::CloseParen => {
                    self.output.write_char(')')?;
                    continue;
                }
            };

            if precedence(expr) < min_prec {
                self.output.write_char('(')?;
                pending.push(InfixStep::CloseParen);
            }
            match expr.inner() {
                ExprInner::Error => self.output.write_str("<error>")?,
                ExprInner::Int(value) => write!(self.output, "{}", value)?,
                ExprInner::Binary { op, left, right } => {
                    let prec = op.precedence();
                    // Left-associative: only the right side needs a tighter bound.
                    pending.push(InfixStep::Expr(right, prec + 1));
                    pending.push(InfixStep::Operator(*op));
                    pending.push(InfixStep::Expr(left, prec));
                }
                ExprInner::Unary { op, operand } => {
                    self.output.write_str(op.symbol())?;
                    // `-(-1)` rather than `--1`.
                    pending.push(InfixStep::Expr(operand, UnaryOp::PRECEDENCE + 1));
                }
            }
        }
        Ok(())
    }
}

fn precedence(expr: &Expr<'_>) -> u8 {
    match expr.inner() {
        ExprInner::Binary { op, .. } => op.precedence(),
        ExprInner::Unary { .. } => UnaryOp::PRECEDENCE,
        // A negative literal reads like a negation.
        ExprInner::Int(value) if **value < IBig::ZERO => UnaryOp::PRECEDENCE,
        ExprInner::Error | ExprInner::Int(_) => u8::MAX,
    }
}

/// Writes `(node-name child...)` dumps, with the span when known.
struct TreeFormatter<'w, W: Write> {
    output: &'w mut W,
}

enum TreeStep<'e> {
    Open(&'e Expr<'e>),
    Space,
    Close(Option<&'e Span>),
}

impl<W: Write> TreeFormatter<'_, W> {
    fn write_expr(&mut self, root: &Expr<'_>) -> fmt::Result {
        let mut pending = vec![TreeStep::Open(root)];
        while let Some(step) = pending.pop() {
            match step {
                TreeStep::Open(expr) => {
                    write!(self.output, "({}", expr.node_name())?;
                    if let ExprInner::Int(value) = expr.inner() {
                        write!(self.output, " {}", value)?;
                    }
                    pending.push(TreeStep::Close(expr.span()));
                    let first_child = pending.len();
                    for child in expr.children() {
                        pending.push(TreeStep::Space);
                        pending.push(TreeStep::Open(child));
                    }
                    // Children were pushed in order; the leftmost must pop first.
                    pending[first_child..].reverse();
                }
                TreeStep::Space => self.output.write_char(' ')?,
                TreeStep::Close(span) => {
                    if let Some(span) = span {
                        write!(self.output, " @{}..{}", span.0.start, span.0.end)?;
                    }
                    self.output.write_char(')')?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        InfixFormatter { output: f }.write_expr(self, 0)
    }
}

impl fmt::Debug for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreeFormatter { output: f }.write_expr(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprArena, ExprBuilder, get_error};
        use pretty_assertions::assert_eq;

    #[test]
    fn test_print_literals() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        assert_eq!(print(b.int(42, None)), "42");
        assert_eq!(print(b.int(-42, None)), "-42");
        assert_eq!(print(get_error()), "<error>");
    }

    #[test]
    fn test_print_minimal_parentheses() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let one = b.int(1, None);
        let two = b.int(2, None);
        let three = b.int(3, None);

        assert_eq!(print(b.add(one, b.mul(two, three, None), None)), "1 + 2 * 3");
        assert_eq!(print(b.mul(b.add(one, two, None), three, None)), "(1 + 2) * 3");
        assert_eq!(print(b.sub(b.sub(one, two, None), three, None)), "1 - 2 - 3");
        assert_eq!(print(b.sub(one, b.sub(two, three, None), None)), "1 - (2 - 3)");
        assert_eq!(print(b.div(one, b.modulo(two, three, None), None)), "1 / (2 % 3)");
        assert_eq!(print(b.modulo(b.div(one, two, None), three, None)), "1 / 2 % 3");
    }

    #[test]
    fn test_print_unary() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let one = b.int(1, None);
        let two = b.int(2, None);

        assert_eq!(print(b.neg(one, None)), "-1");
        assert_eq!(print(b.pos(one, None)), "+1");
        assert_eq!(print(b.neg(b.neg(one, None), None)), "-(-1)");
        assert_eq!(print(b.neg(b.int(-1, None), None)), "-(-1)");
        assert_eq!(print(b.neg(b.add(one, two, None), None)), "-(1 + 2)");
        assert_eq!(print(b.mul(b.neg(one, None), two, None)), "-1 * 2");
        assert_eq!(print(b.add(b.int(-5, None), one, None)), "-5 + 1");
    }

    #[test]
    fn test_print_error_child() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.add(b.int(1, None), b.error(), None);
        assert_eq!(print(expr), "1 + <error>");
    }

    #[test]
    fn test_display_matches_print() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.mul(b.add(b.int(1, None), b.int(2, None), None), b.neg(b.int(3, None), None), None);
        assert_eq!(expr.to_string(), print(expr));
        assert_eq!(expr.to_string(), "(1 + 2) * -3");
    }

    #[test]
    fn test_debug_dump() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.add(b.int(2, None), b.neg(b.error(), None), None);
        assert_eq!(
            debug(expr),
            "(add-expression (int-expression 2) (neg-expression (error-expression)))"
        );
    }

    #[test]
    fn test_debug_includes_spans() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.modulo(
            b.int(7, Some(Span::new(0, 1))),
            b.int(2, Some(Span::new(4, 5))),
            Some(Span::new(0, 5)),
        );
        assert_eq!(
            debug(expr),
            "(mod-expression (int-expression 7 @0..1) (int-expression 2 @4..5) @0..5)"
        );
        assert_eq!(format!("{:?}", expr), debug(expr));
    }

    #[test]
    fn test_printing_is_deterministic() {
        let arena = ExprArena::new();
        let b = ExprBuilder::new(&arena);
        let expr = b.sub(b.int(7, None), b.div(b.int(7, None), b.int(2, None), None), None);
        assert_eq!(print(expr), print(expr));
        assert_eq!(debug(expr), debug(expr));
        assert_eq!(print(expr), "7 - 7 / 2");
    }

    fn nested_pos<'a>(b: ExprBuilder<'a>, depth: usize) -> &'a Expr<'a> {
        let mut expr = b.int(0, None);
        for _ in 0..depth {
            expr = b.pos(expr, None);
        }
        expr
    }

    #[test]
    fn test_print_deep_tree() {
        let arena = ExprArena::new();
        let expr = nested_pos(ExprBuilder::new(&arena), 100_000);

        let printed = print(expr);
        // Every `+` but the outermost wraps its operand in parentheses.
        assert!(printed.starts_with("+(+(+("));
        assert!(printed.ends_with("+0)))"));
        assert_eq!(printed.len(), 1 + 2 * 99_999 + 1 + 99_999);
        assert_eq!(expr.to_string(), printed);
    }

    #[test]
    fn test_debug_deep_tree() {
        let arena = ExprArena::new();
        let expr = nested_pos(ExprBuilder::new(&arena), 100_000);

        let dumped = debug(expr);
        assert!(dumped.starts_with("(pos-expression (pos-expression "));
        assert!(dumped.ends_with("(int-expression 0))))"));
        let open = "(pos-expression ".len();
        let leaf = "(int-expression 0)".len();
        assert_eq!(dumped.len(), 100_000 * (open + 1) + leaf);
    }
}

//! Core evaluation logic.

use alloc::{vec, vec::Vec};

use dashu::integer::IBig;
use tracing::{debug, trace};

use crate::{
    ast::{Expr, ExprInner},
    evaluator::{EvalError, EvaluatorOptions, operators},
};

/// Tree-walking evaluator.
///
/// The walk keeps its own work stack and value stack, so the depth of the
/// tree is bounded by memory rather than by the native call stack.
pub struct Evaluator {
    options: EvaluatorOptions,
}

/// Pending work, popped last-in first-out.
enum Step<'e> {
    /// Evaluate a node found at the given nesting depth.
    Visit(&'e Expr<'e>, usize),
    /// Combine the operand values on top of the value stack.
    Apply(&'e Expr<'e>),
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    /// Evaluate an expression tree.
    ///
    /// Operands are evaluated left to right and the first failure is returned.
    pub fn eval(&self, root: &Expr<'_>) -> Result<IBig, EvalError> {
        trace!(kind = root.node_name(), "evaluating expression");

        let mut pending = vec![Step::Visit(root, 0)];
        let mut values: Vec<IBig> = Vec::new();
        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(expr, depth) => {
                    self.check_depth(depth)?;
                    match expr.inner() {
                        // Already diagnosed by whoever built the error node.
                        ExprInner::Error => return Err(EvalError::PropagatedError),
                        ExprInner::Int(value) => values.push((*value).clone()),
                        ExprInner::Binary { left, right, .. } => {
                            pending.push(Step::Apply(expr));
                            pending.push(Step::Visit(right, depth + 1));
                            pending.push(Step::Visit(left, depth + 1));
                        }
                        ExprInner::Unary { operand, .. } => {
                            pending.push(Step::Apply(expr));
                            pending.push(Step::Visit(operand, depth + 1));
                        }
                    }
                }
                Step::Apply(expr) => {
                    let value = Self::apply(expr, &mut values)?;
                    values.push(value);
                }
            }
        }

        match (values.pop(), values.is_empty()) {
            (Some(value), true) => Ok(value),
            _ => unreachable!("evaluation leaves exactly one value"),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), EvalError> {
        let Some(max_depth) = self.options.max_depth else {
            return Ok(());
        };
        if depth >= max_depth {
            debug!(depth, max_depth, "evaluation depth limit reached");
            return Err(EvalError::StackOverflow { depth, max_depth });
        }
        Ok(())
    }

    /// Combine the already evaluated operands of `expr`.
    fn apply(expr: &Expr<'_>, values: &mut Vec<IBig>) -> Result<IBig, EvalError> {
        match expr.inner() {
            ExprInner::Binary { op, .. } => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("both operands are evaluated before the operator");
                };
                operators::eval_binary_int(*op, &left, &right, expr.span()).inspect_err(
                    |err| debug!(kind = expr.node_name(), error = %err, "arithmetic failed"),
                )
            }
            ExprInner::Unary { op, .. } => {
                let Some(operand) = values.pop() else {
                    unreachable!("the operand is evaluated before the operator");
                };
                Ok(operators::eval_unary_int(*op, operand))
            }
            ExprInner::Error | ExprInner::Int(_) => {
                unreachable!("leaves are pushed as values when visited")
            }
        }
    }
}

//! Tree-walking evaluator for calculator expressions.
//!
//! The evaluator interprets an [`Expr`] tree and produces an arbitrary-precision
//! integer.
//!
//! ## Semantics
//!
//! - Error nodes fail with [`EvalError::PropagatedError`].
//! - `+`, `-` and `*` are exact; there is no overflow.
//! - `/` truncates toward zero and `%` takes the sign of the dividend.
//!   A zero divisor fails with [`EvalError::DivisionByZero`].
//! - Operands are evaluated left to right and the first failure wins.
//!
//! ## Design Principles
//!
//! - **Never panic**: All inputs are handled gracefully
//! - **Stack-safe**: The walk uses explicit stacks, so deep trees cannot overflow the native stack
//! - **Pure**: Evaluation has no side effects; the tree is only read
//!
//! ## Example
//!
//! ```
//! use calc_core::{ast::{ExprArena, ExprBuilder}, evaluator};
//! use dashu::integer::IBig;
//!
//! let arena = ExprArena::new();
//! let b = ExprBuilder::new(&arena);
//!
//! // 2 + 3 * 4
//! let expr = b.add(b.int(2, None), b.mul(b.int(3, None), b.int(4, None), None), None);
//! assert_eq!(evaluator::evaluate(expr), Ok(IBig::from(14)));
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use eval::Evaluator;

use crate::ast::Expr;
use dashu::integer::IBig;

/// Configuration options for expression evaluation.
///
/// # Example
///
/// ```
/// use calc_core::evaluator::EvaluatorOptions;
///
/// let options = EvaluatorOptions { max_depth: Some(500) };
/// assert_eq!(EvaluatorOptions::default().max_depth, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvaluatorOptions {
    /// Maximum nesting depth of the evaluated tree, `None` for no limit.
    ///
    /// Default: `None`
    pub max_depth: Option<usize>,
}

/// Evaluate an expression.
///
/// Fails only with [`EvalError::PropagatedError`] or
/// [`EvalError::DivisionByZero`]; there is no depth limit.
pub fn evaluate(expr: &Expr<'_>) -> Result<IBig, EvalError> {
    evaluate_with_options(expr, EvaluatorOptions::default())
}

/// Evaluate an expression with custom options.
///
/// With a `max_depth`, trees nested deeper than the limit fail with
/// [`EvalError::StackOverflow`].
///
/// ## Example
///
/// ```ignore
/// // Reject machine-generated trees nested too deeply
/// let result = evaluate_with_options(expr, EvaluatorOptions { max_depth: Some(5000) })?;
/// ```
pub fn evaluate_with_options(expr: &Expr<'_>, options: EvaluatorOptions) -> Result<IBig, EvalError> {
    Evaluator::new(options).eval(expr)
}

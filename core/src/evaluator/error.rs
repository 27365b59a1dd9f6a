//! Evaluation errors.
//!
//! # Error Categories
//!
//! - **Propagated errors**: the tree contains an error node. The parse failure
//!   behind it was already reported upstream, so callers should not report it again.
//!
//! - **Runtime errors**: arithmetic that has no result (division by zero).
//!
//! - **Resource exceeded errors**: the tree is deeper than the configured limit.

use alloc::format;
use alloc::string::String;

use crate::ast::Span;

/// Error produced by [`evaluate`](super::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Evaluation reached an error node.
    #[error("Evaluation reached an error node")]
    PropagatedError,

    /// Division or remainder with a zero divisor.
    #[error("Division by zero{}", at(.span))]
    DivisionByZero { span: Option<Span> },

    /// The tree is nested deeper than `EvaluatorOptions::max_depth` allows.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    /// Whether the caller should emit a diagnostic for this error.
    ///
    /// Propagated errors were already diagnosed where the error node was built.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, EvalError::PropagatedError)
    }

    /// Location of the node that failed, if known.
    pub fn span(&self) -> Option<&Span> {
        match self {
            EvalError::DivisionByZero { span } => span.as_ref(),
            EvalError::PropagatedError | EvalError::StackOverflow { .. } => None,
        }
    }
}

fn at(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at {}..{}", span.0.start, span.0.end),
        None => String::new(),
    }
}

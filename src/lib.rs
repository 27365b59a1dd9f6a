//! calc - abstract syntax and evaluation for a minimal integer calculator
//!
//! # Overview
//!
//! This crate is the public face of `calc-core`. It covers everything that
//! happens after parsing:
//!
//! - Building expression trees in an arena ([`ExprBuilder`])
//! - Evaluating them to arbitrary-precision integers ([`evaluate`])
//! - Marking reachable nodes for an external collector ([`mark`])
//! - Rendering trees for diagnostics ([`print`], [`debug`])
//!
//! # Quick Start
//!
//! ```
//! use calc::{ExprArena, ExprBuilder, IBig, Span, evaluate, print};
//!
//! // Nodes live as long as the arena.
//! let arena = ExprArena::new();
//! let b = ExprBuilder::new(&arena);
//!
//! // 7 - 7 / 2
//! let expr = b.sub(
//!     b.int(7, Some(Span::new(0, 1))),
//!     b.div(b.int(7, Some(Span::new(4, 5))), b.int(2, Some(Span::new(8, 9))), Some(Span::new(4, 9))),
//!     Some(Span::new(0, 9)),
//! );
//!
//! assert_eq!(print(expr), "7 - 7 / 2");
//! assert_eq!(evaluate(expr), Ok(IBig::from(4)));
//! ```
//!
//! # Errors
//!
//! A front end that fails to parse a subtree substitutes [`get_error`]. All
//! error placeholders are the same node, and evaluating one yields
//! [`EvalError::PropagatedError`], which [`EvalError::is_reportable`] marks as
//! already diagnosed.

// Re-export public API from calc_core
pub use calc_core::ast::{
    self, BinaryOp, Expr, ExprArena, ExprBuilder, ExprInner, InvalidKind, Kind, Span, UnaryOp, get_error,
    get_node_name,
};
pub use calc_core::evaluator::{
    self, EvalError, Evaluator, EvaluatorOptions, evaluate, evaluate_with_options,
};
pub use calc_core::gc::{self, Collector, MarkSet, mark};
pub use calc_core::printer::{self, debug, print};

// Arbitrary-precision integer type produced by evaluation.
pub use dashu::integer::IBig;

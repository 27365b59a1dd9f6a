//! Expression tree for the calculator language.
//!
//! - [`Kind`] and [`get_node_name`]: the node kind registry.
//! - [`Expr`] / [`ExprInner`]: the closed set of node shapes.
//! - [`ExprArena`] / [`ExprBuilder`]: own and allocate the nodes of a tree.
//! - [`get_error`]: the canonical error placeholder.

mod arena;
mod builder;
mod expr;
mod kind;
mod syntax;

pub use arena::ExprArena;
pub use builder::ExprBuilder;
pub use expr::{Expr, ExprInner, get_error};
pub use kind::{InvalidKind, Kind, get_node_name};
pub use syntax::{BinaryOp, Span, UnaryOp};

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Abstract syntax and evaluation for a minimal integer calculator language.
//!
//! - [`ast`]: node kinds, the expression tree and its arena builder.
//! - [`evaluator`]: arbitrary-precision evaluation.
//! - [`gc`]: reachability marking for an external collector.
//! - [`printer`]: infix and structural renderings.
//!
//! Parsing is out of scope: a front end builds trees with
//! [`ast::ExprBuilder`] and hands them to the functions here.

extern crate alloc;

pub mod ast;
pub mod evaluator;
pub mod gc;
pub mod printer;

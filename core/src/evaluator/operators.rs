//! Binary and unary operator implementations.
//!
//! Integers are arbitrary precision, so addition, subtraction and
//! multiplication never overflow. Division truncates toward zero and the
//! remainder takes the sign of the dividend, which keeps
//! `quotient * divisor + remainder == dividend` for every non-zero divisor.

use dashu::integer::IBig;

use crate::{
    ast::{BinaryOp, Span, UnaryOp},
    evaluator::EvalError,
};

/// Evaluate a binary operation on two integers.
///
/// Division by zero returns an error carrying `span`.
pub(super) fn eval_binary_int(
    op: BinaryOp,
    left: &IBig,
    right: &IBig,
    span: Option<&Span>,
) -> Result<IBig, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div | BinaryOp::Mod if *right == IBig::ZERO => Err(EvalError::DivisionByZero {
            span: span.cloned(),
        }),
        BinaryOp::Div => Ok(left / right),
        BinaryOp::Mod => Ok(left % right),
    }
}

/// Evaluate a unary operation on an integer.
pub(super) fn eval_unary_int(op: UnaryOp, operand: IBig) -> IBig {
    match op {
        UnaryOp::Neg => -operand,
        UnaryOp::Pos => operand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> IBig {
        IBig::from(n)
    }

    fn binary(op: BinaryOp, left: i64, right: i64) -> Result<IBig, EvalError> {
        eval_binary_int(op, &int(left), &int(right), None)
    }

    #[test]
    fn test_int_add() {
        assert_eq!(binary(BinaryOp::Add, 2, 3).unwrap(), int(5));
        assert_eq!(binary(BinaryOp::Add, -5, 3).unwrap(), int(-2));
    }

    #[test]
    fn test_int_sub() {
        assert_eq!(binary(BinaryOp::Sub, 10, 4).unwrap(), int(6));
        assert_eq!(binary(BinaryOp::Sub, 3, 10).unwrap(), int(-7));
    }

    #[test]
    fn test_int_mul() {
        assert_eq!(binary(BinaryOp::Mul, 3, 4).unwrap(), int(12));
        assert_eq!(binary(BinaryOp::Mul, -2, 5).unwrap(), int(-10));
    }

    #[test]
    fn test_int_div_truncates_toward_zero() {
        assert_eq!(binary(BinaryOp::Div, 10, 2).unwrap(), int(5));
        assert_eq!(binary(BinaryOp::Div, 7, 2).unwrap(), int(3));
        assert_eq!(binary(BinaryOp::Div, -7, 2).unwrap(), int(-3));
        assert_eq!(binary(BinaryOp::Div, 7, -2).unwrap(), int(-3));
        assert_eq!(binary(BinaryOp::Div, -7, -2).unwrap(), int(3));
    }

    #[test]
    fn test_int_mod_takes_sign_of_dividend() {
        assert_eq!(binary(BinaryOp::Mod, 7, 2).unwrap(), int(1));
        assert_eq!(binary(BinaryOp::Mod, -7, 2).unwrap(), int(-1));
        assert_eq!(binary(BinaryOp::Mod, 7, -2).unwrap(), int(1));
        assert_eq!(binary(BinaryOp::Mod, -7, -2).unwrap(), int(-1));
    }

    #[test]
    fn test_int_div_by_zero() {
        let span = Span::new(2, 7);
        let result = eval_binary_int(BinaryOp::Div, &int(10), &int(0), Some(&span));
        assert_eq!(result, Err(EvalError::DivisionByZero { span: Some(span) }));
    }

    #[test]
    fn test_int_mod_by_zero() {
        let result = binary(BinaryOp::Mod, 10, 0);
        assert!(matches!(result, Err(EvalError::DivisionByZero { span: None })));
    }

    #[test]
    fn test_no_overflow() {
        let max = int(i64::MAX);
        let sum = eval_binary_int(BinaryOp::Add, &max, &int(1), None).unwrap();
        assert_eq!(sum, IBig::from(i64::MAX as i128 + 1));

        let product = eval_binary_int(BinaryOp::Mul, &max, &max, None).unwrap();
        assert_eq!(product, IBig::from(i64::MAX as i128 * i64::MAX as i128));
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval_unary_int(UnaryOp::Neg, int(5)), int(-5));
        assert_eq!(eval_unary_int(UnaryOp::Neg, int(-5)), int(5));
        assert_eq!(eval_unary_int(UnaryOp::Pos, int(-5)), int(-5));
    }
}

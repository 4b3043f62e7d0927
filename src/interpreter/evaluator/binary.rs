use crate::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies a binary operator to two evaluated operands.
///
/// All arithmetic is checked. Division truncates toward zero, so `7 / 2` is `3`
/// and `-7 / 2` is `-3`.
///
/// # Errors
/// - `DivisionByZero` when `op` is `Div` and `right` is zero.
/// - `Overflow` when the result does not fit in an `i64`, including
///   `i64::MIN / -1`.
///
/// # Example
/// ```
/// use exptree::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1, 0), Err(EvalError::DivisionByZero));
/// assert_eq!(eval_binary(BinaryOperator::Add, i64::MAX, 1),
///            Err(EvalError::Overflow { op: BinaryOperator::Add }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            left.checked_div(right)
        },
    };

    result.ok_or(EvalError::Overflow { op })
}

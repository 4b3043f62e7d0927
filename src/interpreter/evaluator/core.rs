use tracing::debug;

use crate::{ast::Expr, error::EvalError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to an integer.
///
/// Operands evaluate to their value. Operator nodes evaluate their left
/// subtree, then their right subtree, then combine the two with
/// [`eval_binary`]. The tree is only borrowed, so the same tree can be
/// evaluated any number of times with the same result.
///
/// # Errors
/// - `DivisionByZero` if the right operand of a `/` is zero.
/// - `Overflow` if an intermediate result does not fit in an `i64`.
///
/// # Example
/// ```
/// use exptree::{build, error::EvalError, evaluate};
///
/// let tree = build("(2 + 3) * 4").unwrap();
/// assert_eq!(evaluate(&tree), Ok(20));
///
/// let tree = build("5 / 0").unwrap();
/// assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(node: &Expr) -> EvalResult<i64> {
    let value = eval_node(node)?;
    debug!(value, "evaluated expression tree");
    Ok(value)
}

fn eval_node(node: &Expr) -> EvalResult<i64> {
    match node {
        Expr::Operand(value) => Ok(*value),
        Expr::Operator { op, left, right } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;
            eval_binary(*op, left, right)
        },
    }
}

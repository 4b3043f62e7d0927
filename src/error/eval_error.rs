use crate::ast::BinaryOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a tree.
pub enum EvalError {
    /// The right operand of `/` evaluated to zero.
    DivisionByZero,
    /// The result of an operation does not fit in a 64-bit signed integer.
    Overflow {
        /// The operator whose result overflowed.
        op: BinaryOperator,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow { op } => {
                write!(f, "Integer overflow while computing '{op}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}

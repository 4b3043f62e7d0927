/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing the input or
/// building the expression tree: characters outside the supported set,
/// unbalanced parentheses, literals that do not fit in 64 bits, and operator
/// and operand sequences that cannot form a tree.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a built tree to an integer:
/// division by zero and arithmetic overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

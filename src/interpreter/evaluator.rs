/// Tree evaluation.
///
/// Walks the expression tree depth first and reduces it to a single integer.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `+ - * /`, reporting division by
/// zero and overflow instead of panicking.
pub mod binary;

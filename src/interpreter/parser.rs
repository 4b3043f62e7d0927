/// Parsing entry point.
///
/// Declares the result type shared by the lexer and tree builder and the
/// `build` function that turns source text into an expression tree.
pub mod core;

/// The operator and operand stacks.
///
/// Holds pending operators and finished subtrees while the input is scanned,
/// and performs the reductions that join them into larger subtrees.
pub mod stack;

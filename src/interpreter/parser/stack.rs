use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Deepest tree the builder accepts, counted in nodes from root to leaf.
///
/// Evaluation and rendering recurse once per level, so deeper trees are
/// rejected before they can exhaust the thread's stack.
pub const MAX_TREE_DEPTH: usize = 4096;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An opening parenthesis waiting for its `)`.
    LParen {
        /// Position of the `(` in the input.
        position: usize,
    },
    /// An operator waiting for its right operand to be complete.
    Operator(BinaryOperator),
}

/// The two stacks driving tree construction.
///
/// Operands are finished subtrees paired with their depth; pending entries are
/// operators and open parentheses that have not been reduced yet. Reducing
/// pops one operator and two operands and pushes the combined subtree back onto
/// the operand stack.
#[derive(Debug, Default)]
pub struct TreeStacks {
    operators: Vec<Pending>,
    operands:  Vec<(Expr, usize)>,
}

impl TreeStacks {
    /// Creates empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an integer leaf.
    pub fn push_operand(&mut self, value: i64) {
        self.operands.push((Expr::Operand(value), 1));
    }

    /// Pushes an opening parenthesis found at `position`.
    pub fn open_paren(&mut self, position: usize) {
        self.operators.push(Pending::LParen { position });
    }

    /// Pushes `op` after reducing every stacked operator that binds at least as
    /// tightly. Reduction stops at an open parenthesis.
    ///
    /// # Errors
    /// - `MalformedExpression` if a reduction lacks operands.
    /// - `NestingTooDeep` if a reduction exceeds [`MAX_TREE_DEPTH`].
    pub fn push_operator(&mut self, op: BinaryOperator) -> ParseResult<()> {
        while let Some(&Pending::Operator(top)) = self.operators.last()
              && op.precedence() <= top.precedence()
        {
            self.operators.pop();
            self.reduce(top)?;
        }
        self.operators.push(Pending::Operator(op));
        Ok(())
    }

    /// Reduces operators down to the nearest `(` and discards it.
    ///
    /// # Errors
    /// - `UnbalancedParentheses` if no `(` is left on the stack.
    /// - `MalformedExpression` if a reduction lacks operands.
    /// - `NestingTooDeep` if a reduction exceeds [`MAX_TREE_DEPTH`].
    pub fn close_paren(&mut self, position: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.reduce(op)?,
                Some(Pending::LParen { .. }) => return Ok(()),
                None => return Err(ParseError::UnbalancedParentheses { position }),
            }
        }
    }

    /// Reduces everything left at end of input and returns the single
    /// remaining tree.
    ///
    /// # Errors
    /// - `UnbalancedParentheses` for a `(` that was never closed.
    /// - `MalformedExpression` if a reduction lacks operands, or if anything
    ///   other than exactly one tree remains.
    /// - `NestingTooDeep` if a reduction exceeds [`MAX_TREE_DEPTH`].
    pub fn finish(mut self) -> ParseResult<Expr> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::LParen { position } => {
                    return Err(ParseError::UnbalancedParentheses { position });
                },
            }
        }

        let root = self.operands.pop();
        match (root, self.operands.len()) {
            (Some((root, _)), 0) => Ok(root),
            (None, _) => Err(ParseError::MalformedExpression { details: "empty expression".to_string() }),
            (Some(_), extra) => Err(ParseError::MalformedExpression {
                details: format!("missing operator between {} operands", extra + 1),
            }),
        }
    }

    /// Pops the right operand, then the left one, and pushes `left op right`.
    fn reduce(&mut self, op: BinaryOperator) -> ParseResult<()> {
        let missing = || ParseError::MalformedExpression { details: format!("operator '{op}' is missing an operand") };

        let (right, right_depth) = self.operands.pop().ok_or_else(missing)?;
        let (left, left_depth) = self.operands.pop().ok_or_else(missing)?;

        let depth = 1 + left_depth.max(right_depth);
        if depth > MAX_TREE_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_TREE_DEPTH });
        }

        trace!(%op, depth, "reducing");
        self.operands.push((Expr::operator(op, left, right), depth));
        Ok(())
    }
}

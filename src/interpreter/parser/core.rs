use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::stack::TreeStacks,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds an expression tree from an infix expression.
///
/// This is the entry point for parsing. The input is tokenized, then scanned
/// left to right with two stacks: integers go straight onto the operand stack,
/// while operators and parentheses wait on the operator stack until their
/// operands are complete. Reducing an operator turns the top two operands into
/// a single subtree, so the tree grows from the leaves up.
///
/// `+` and `-` bind looser than `*` and `/`; operators of equal precedence
/// associate to the left.
///
/// # Errors
/// - `InvalidCharacter` / `LiteralTooLarge` from the lexer.
/// - `UnbalancedParentheses` for an unmatched `(` or `)`.
/// - `MalformedExpression` for empty input, a dangling operator, or two
///   operands with nothing between them.
/// - `NestingTooDeep` for a tree deeper than
///   [`MAX_TREE_DEPTH`](crate::interpreter::parser::stack::MAX_TREE_DEPTH).
///
/// The first failing step determines the error.
///
/// # Example
/// ```
/// use exptree::{build, error::ParseError};
///
/// let tree = build("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let tree = build("8 - 3 - 2").unwrap();
/// assert_eq!(tree.to_string(), "((8 - 3) - 2)");
///
/// assert!(matches!(build("(1 + 2"), Err(ParseError::UnbalancedParentheses { .. })));
/// assert!(matches!(build("1 +"), Err(ParseError::MalformedExpression { .. })));
/// ```
pub fn build(expression: &str) -> ParseResult<Expr> {
    let tokens = tokenize(expression)?;
    let mut stacks = TreeStacks::new();

    for &(token, position) in &tokens {
        match token {
            Token::Integer(value) => stacks.push_operand(value),
            Token::LParen => stacks.open_paren(position),
            Token::RParen => stacks.close_paren(position)?,
            Token::Plus => stacks.push_operator(BinaryOperator::Add)?,
            Token::Minus => stacks.push_operator(BinaryOperator::Sub)?,
            Token::Star => stacks.push_operator(BinaryOperator::Mul)?,
            Token::Slash => stacks.push_operator(BinaryOperator::Div)?,
        }
    }

    let tree = stacks.finish()?;
    debug!(tokens = tokens.len(), nodes = tree.node_count(), %tree, "built expression tree");
    Ok(tree)
}

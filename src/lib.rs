//! # exptree
//!
//! exptree parses infix integer arithmetic into an expression tree and
//! evaluates it. Expressions may contain non-negative integer literals, the
//! operators `+ - * /`, parentheses and whitespace. Multiplication and
//! division bind tighter than addition and subtraction, and all four operators
//! associate to the left.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the expression tree.
///
/// This module declares the `Expr` enum, whose two variants are integer
/// operands and binary operator nodes, and the `BinaryOperator` enum with the
/// precedence rules the parser relies on.
///
/// # Responsibilities
/// - Owns subtrees exclusively through boxes, so trees are acyclic and are
///   freed when the root is dropped.
/// - Renders trees fully parenthesized for logs and diagnostics.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// building, or evaluating an expression, each carrying enough detail (such as
/// the character position) for a useful message.
pub mod error;
/// Orchestrates lexing, tree building and evaluation.
///
/// # Responsibilities
/// - Converts the input into positioned tokens.
/// - Builds the expression tree with an operator stack and an operand stack.
/// - Evaluates the tree with checked integer arithmetic.
pub mod interpreter;

pub use crate::interpreter::{evaluator::core::evaluate, parser::core::build};

/// An expression tree together with the value it evaluated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The tree built from the source.
    pub tree:  ast::Expr,
    /// The tree's value.
    pub value: i64,
}

/// Builds and evaluates an expression, keeping the tree alongside its value.
///
/// Parse errors and evaluation errors are both propagated; nothing is printed.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or its evaluation
/// fails.
///
/// # Examples
/// ```
/// use exptree::get_evaluation;
///
/// let evaluation = get_evaluation("8 - 3 - 2").unwrap();
/// assert_eq!(evaluation.tree.to_string(), "((8 - 3) - 2)");
/// assert_eq!(evaluation.value, 3);
/// ```
pub fn get_evaluation(source: &str) -> Result<Evaluation, Box<dyn std::error::Error>> {
    debug!(source, "evaluating expression");

    let tree = build(source)?;
    let value = evaluate(&tree)?;

    Ok(Evaluation { tree, value })
}

/// Builds and evaluates an expression, returning its integer value.
///
/// # Errors
/// Returns an error if the expression cannot be parsed or its evaluation
/// fails.
///
/// # Examples
/// ```
/// use exptree::get_result;
///
/// assert_eq!(get_result("  ( 1+2 )  *3 ").unwrap(), 9);
///
/// // Division by zero surfaces as an error.
/// assert!(get_result("5 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    get_evaluation(source).map(|evaluation| evaluation.value)
}

use std::fmt;

/// A node of the expression tree.
///
/// The tree is built bottom-up by [`crate::build`], so every `Operator` node
/// owns both of its children from the moment it exists. Children are boxed and
/// owned by exactly one parent; dropping the root frees the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal.
    Operand(i64),
    /// A binary operation applied to two subtrees.
    Operator {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates an operator node owning `left` and `right`.
    ///
    /// # Example
    /// ```
    /// use exptree::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::operator(BinaryOperator::Add, Expr::Operand(1), Expr::Operand(2));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn operator(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Number of nodes in the tree, operands and operators alike.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Operand(_) => 1,
            Self::Operator { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `((2 + 3) * 4)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding strength used by the tree builder. Higher binds tighter.
    ///
    /// `+` and `-` share precedence 1, `*` and `/` share precedence 2. All four
    /// are left-associative, so equal precedence reduces the earlier operator
    /// first.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

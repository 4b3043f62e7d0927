#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or tree building.
///
/// Positions are zero-based character indices into the input.
pub enum ParseError {
    /// A character outside digits, `+ - * /`, parentheses and whitespace.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnbalancedParentheses {
        /// Position of the unmatched parenthesis.
        position: usize,
    },
    /// The tokens do not form a single expression: empty input, a dangling
    /// operator, or two operands with no operator between them.
    MalformedExpression {
        /// What went wrong.
        details: String,
    },
    /// An integer literal too large for a 64-bit signed integer.
    LiteralTooLarge {
        /// Position of the literal's first digit.
        position: usize,
    },
    /// The expression tree would be deeper than the builder allows.
    NestingTooDeep {
        /// The maximum depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::UnbalancedParentheses { position } => {
                write!(f, "Unbalanced parentheses: unmatched parenthesis at position {position}.")
            },
            Self::MalformedExpression { details } => write!(f, "Malformed expression: {details}."),
            Self::LiteralTooLarge { position } => {
                write!(f, "Literal at position {position} is too large.")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Expression is nested too deeply: the limit is {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// The evaluator module reduces expression trees to integers.
///
/// The evaluator walks the tree built by the parser, applies each operator to
/// the values of its subtrees, and reports runtime errors such as division by
/// zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw input and produces integer literals, operators and
/// parentheses, each paired with its character position. Whitespace is
/// skipped and any other character is rejected.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser scans the token stream with an operator stack and an operand
/// stack, joining operands into subtrees as operator precedence and
/// parentheses allow.
pub mod parser;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// Only integer literals, the four arithmetic operators and parentheses are
/// recognized. Spaces, tabs, newlines and feeds are skipped; every other
/// character is a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\f\v]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Always non-negative.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the digit run does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits `source` into tokens paired with their character position.
///
/// Positions are zero-based character indices, so they stay meaningful for
/// error messages even when the input contains multi-byte characters.
///
/// # Errors
/// - `InvalidCharacter` for any character that starts no token.
/// - `LiteralTooLarge` for a digit run that overflows `i64`.
///
/// # Example
/// ```
/// use exptree::{
///     error::ParseError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(12 +3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Integer(12), 1),
///                 (Token::Plus, 4),
///                 (Token::Integer(3), 5),
///                 (Token::RParen, 6)]);
///
/// assert_eq!(tokenize("1 + a"),
///            Err(ParseError::InvalidCharacter { character: 'a',
///                                               position:  4, }));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut cursor = Cursor::default();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let position = cursor.advance_to(source, span.start);

        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { position });
                }

                let character = source.get(span.start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::InvalidCharacter { character, position });
            },
        }
    }

    Ok(tokens)
}

/// Tracks the character index of a byte offset as the lexer moves forward.
///
/// Only the characters between the previous token and the next one are
/// counted, so a whole pass over the input stays linear.
#[derive(Default)]
struct Cursor {
    byte_index: usize,
    char_index: usize,
}

impl Cursor {
    /// Moves to `byte_offset`, which must not be behind the cursor, and
    /// returns its character index.
    fn advance_to(&mut self, source: &str, byte_offset: usize) -> usize {
        let skipped = source.get(self.byte_index..byte_offset)
                            .map_or(byte_offset.saturating_sub(self.byte_index), |gap| gap.chars().count());
        self.char_index += skipped;
        self.byte_index = byte_offset;
        self.char_index
    }
}

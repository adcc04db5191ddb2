//! Error types for the compiler
//!
//! Every error is fatal: the first one detected stops the compilation and is
//! handed back to the caller. [`LexError`] covers character-level faults,
//! [`ParseError`] covers grammar and name-checking faults, and
//! [`CompileError`] is what the public entry points return.
//!
//! The only position information carried is the text of the failing token.

use crate::compiler::token::{Token, TokenKind};
use std::fmt;

/// Faults found while turning characters into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the language's alphabet
    UnknownToken { ch: char },

    /// `!` not followed by `=`
    ExpectedNotEqual { found: Option<char> },

    /// `\r`, `\t`, `\` or `%` inside a string literal
    IllegalStringCharacter { ch: char },

    /// Newline or end of input before the closing quote
    UnterminatedString,

    /// A decimal point with no digit after it
    MalformedNumber { text: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnknownToken { ch } => write!(f, "Unknown token: {:?}", ch),
            LexError::ExpectedNotEqual { found: Some(ch) } => {
                write!(f, "Expected !=, got !{}", ch.escape_debug())
            }
            LexError::ExpectedNotEqual { found: None } => {
                write!(f, "Expected !=, got ! at end of input")
            }
            LexError::IllegalStringCharacter { ch } => {
                write!(f, "Illegal character in string: {:?}", ch)
            }
            LexError::UnterminatedString => write!(f, "Unterminated string literal"),
            LexError::MalformedNumber { text } => {
                write!(f, "Illegal character in number: {} (expected a digit after '.')", text)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Grammar and name-checking faults
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token kind was required
    ExpectedKind { expected: TokenKind, found: Token },

    /// The current token cannot start a statement
    InvalidStatement { found: Token },

    /// A bare expression was used as a condition
    ExpectedComparison { found: Token },

    /// An identifier read before any LET or INPUT of it
    UndeclaredVariable { name: String },

    /// The same LABEL declared twice
    DuplicateLabel { name: String },

    /// A GOTO target with no LABEL anywhere in the program
    UndeclaredLabel { name: String },

    /// Anything other than a number or identifier where an operand belongs
    UnexpectedToken { found: Token },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedKind { expected, found } => {
                write!(f, "Expected {}, got {}", expected, found)
            }
            ParseError::InvalidStatement { found } => {
                write!(f, "Invalid statement at {}", found)
            }
            ParseError::ExpectedComparison { found } => write!(
                f,
                "Expected comparison operator at {} (a bare expression is not a valid condition)",
                found
            ),
            ParseError::UndeclaredVariable { name } => {
                write!(f, "Referencing a variable before assignment: {}", name)
            }
            ParseError::DuplicateLabel { name } => write!(f, "Label already exists: {}", name),
            ParseError::UndeclaredLabel { name } => {
                write!(f, "Attempting to GOTO to an undeclared label: {}", name)
            }
            ParseError::UnexpectedToken { found } => write!(f, "Unexpected token at {}", found),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned by the compilation entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(err) => write!(f, "Lexing error: {}", err),
            CompileError::Parse(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lex(err) => Some(err),
            CompileError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_token() {
        let err = CompileError::from(ParseError::ExpectedKind {
            expected: TokenKind::Then,
            found: Token::new("REPEAT", TokenKind::Repeat),
        });
        assert_eq!(err.to_string(), "Parsing error: Expected THEN, got REPEAT 'REPEAT'");

        let err = CompileError::from(LexError::ExpectedNotEqual { found: Some('x') });
        assert_eq!(err.to_string(), "Lexing error: Expected !=, got !x");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = CompileError::from(LexError::UnterminatedString);
        let source = err.source().expect("compile errors wrap an inner error");
        assert_eq!(source.to_string(), "Unterminated string literal");
    }
}

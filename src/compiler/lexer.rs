//! Lexer (tokenizer) for BASIC source text
//!
//! Produces [`Token`]s one at a time on demand; the parser pulls from
//! [`Lexer::next_token`] rather than working over a pre-built vector.
//!
//! Newlines are significant (they terminate statements) and are returned as
//! `NEWLINE` tokens. A newline is always appended to the input so that the
//! final statement is terminated even when the file does not end with one.
//! Comments start with `#` and run to the end of the line.

use crate::compiler::errors::LexError;
use crate::compiler::token::{Token, TokenKind};

/// Character cursor over one source program
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current: Option<char>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(source: &str) -> Self {
        let mut input: Vec<char> = source.chars().collect();
        input.push('\n');
        let current = input.first().copied();
        Self {
            input,
            position: 0,
            current,
        }
    }

    /// Tokenize the entire input, up to and including the first `EOF`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }

        Ok(tokens)
    }

    /// Return the next token. Once the input is exhausted every call
    /// returns `EOF`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.skip_comment();

        let Some(ch) = self.current else {
            return Ok(Token::new("", TokenKind::Eof));
        };

        let token = match ch {
            '+' => Token::new("+", TokenKind::Plus),
            '-' => Token::new("-", TokenKind::Minus),
            '*' => Token::new("*", TokenKind::Asterisk),
            '/' => Token::new("/", TokenKind::Slash),
            '=' => self.one_or_two_char(TokenKind::Eq, TokenKind::EqEq),
            '<' => self.one_or_two_char(TokenKind::Lt, TokenKind::LtEq),
            '>' => self.one_or_two_char(TokenKind::Gt, TokenKind::GtEq),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new("!=", TokenKind::NotEq)
                } else {
                    return Err(LexError::ExpectedNotEqual { found: self.peek() });
                }
            }
            '"' => self.string_literal()?,
            '0'..='9' => self.number_literal()?,
            c if c.is_ascii_alphabetic() => self.identifier_or_keyword(),
            '\n' => Token::new("\n", TokenKind::Newline),
            _ => return Err(LexError::UnknownToken { ch }),
        };

        self.advance();
        Ok(token)
    }

    /// `=`, `<` and `>` become their two-character form when followed by `=`.
    fn one_or_two_char(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let first = self.current.unwrap_or_default();
        if self.peek() == Some('=') {
            self.advance();
            Token::new(format!("{}=", first), double)
        } else {
            Token::new(first.to_string(), single)
        }
    }

    /// Leaves the cursor on the closing quote.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        self.advance(); // skip opening quote
        let start = self.position;

        loop {
            match self.current {
                Some('"') => break,
                None | Some('\n') => return Err(LexError::UnterminatedString),
                // Strings are pasted into printf format strings verbatim.
                Some(ch @ ('\r' | '\t' | '\\' | '%')) => {
                    return Err(LexError::IllegalStringCharacter { ch });
                }
                Some(_) => self.advance(),
            }
        }

        Ok(Token::new(self.slice(start, self.position), TokenKind::String))
    }

    /// Digits, optionally followed by `.` and at least one more digit.
    /// Leaves the cursor on the last character of the literal.
    fn number_literal(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.skip_digits();

        if self.peek() == Some('.') {
            self.advance();
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError::MalformedNumber {
                    text: self.slice(start, self.position + 1),
                });
            }
            self.skip_digits();
        }

        Ok(Token::new(
            self.slice(start, self.position + 1),
            TokenKind::Number,
        ))
    }

    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let text = self.slice(start, self.position + 1);
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Ident);
        Token::new(text, kind)
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Skip spaces, tabs and carriage returns. Newlines are tokens.
    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\r')) {
            self.advance();
        }
    }

    /// Skip a `#` comment up to, but not including, the newline.
    fn skip_comment(&mut self) {
        if self.current == Some('#') {
            while !matches!(self.current, Some('\n') | None) {
                self.advance();
            }
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end.min(self.input.len())].iter().collect()
    }

    /// Peek at the character after the current one
    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Advance to next character
    fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.position += 1;
        self.current = self.input.get(self.position).copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn first_error(source: &str) -> LexError {
        Lexer::new(source).tokenize().unwrap_err()
    }

    #[test]
    fn test_operators() {
        let tokens = Lexer::new("+ - * / = == != < <= > >=").tokenize().unwrap();
        let expected = [
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Asterisk),
            ("/", TokenKind::Slash),
            ("=", TokenKind::Eq),
            ("==", TokenKind::EqEq),
            ("!=", TokenKind::NotEq),
            ("<", TokenKind::Lt),
            ("<=", TokenKind::LtEq),
            (">", TokenKind::Gt),
            (">=", TokenKind::GtEq),
        ];

        for (token, (text, kind)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.text, text);
        }
        assert_eq!(tokens[11].kind, TokenKind::Newline);
        assert_eq!(tokens[12].kind, TokenKind::Eof);
    }

    #[test]
    fn test_operators_without_spaces() {
        assert_eq!(
            kinds("a>=b<c"),
            vec![
                TokenKind::Ident,
                TokenKind::GtEq,
                TokenKind::Ident,
                TokenKind::Lt,
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers_keep_their_text() {
        for literal in ["0", "42", "3.14", "10.0", "007"] {
            let token = Lexer::new(literal).next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Number);
            assert_eq!(token.text, literal);
        }
    }

    #[test]
    fn test_trailing_decimal_point_is_rejected() {
        assert_eq!(
            first_error("12.\n"),
            LexError::MalformedNumber {
                text: "12.".to_string()
            }
        );
        assert!(matches!(first_error("LET x = 1.a"), LexError::MalformedNumber { .. }));
    }

    #[test]
    fn test_string_literal() {
        let token = Lexer::new("\"hello, world!\"").next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "hello, world!");
    }

    #[test]
    fn test_string_rejects_format_characters() {
        assert_eq!(
            first_error("PRINT \"100%\""),
            LexError::IllegalStringCharacter { ch: '%' }
        );
        assert_eq!(
            first_error("PRINT \"a\\nb\""),
            LexError::IllegalStringCharacter { ch: '\\' }
        );
        assert_eq!(
            first_error("PRINT \"a\tb\""),
            LexError::IllegalStringCharacter { ch: '\t' }
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(first_error("PRINT \"oops"), LexError::UnterminatedString);
        assert_eq!(first_error("PRINT \"oops\nPRINT 1"), LexError::UnterminatedString);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = Lexer::new("LET print = PRINTING").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "print");
        assert_eq!(tokens[2].kind, TokenKind::Eq);
        assert_eq!(tokens[3].kind, TokenKind::Ident);
        assert_eq!(tokens[3].text, "PRINTING");
    }

    #[test]
    fn test_identifier_with_digits() {
        let token = Lexer::new("abc123").next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text, "abc123");
    }

    #[test]
    fn test_comments_are_skipped_but_newline_kept() {
        assert_eq!(
            kinds("# a comment\nPRINT 1 # trailing\n"),
            vec![
                TokenKind::Newline,
                TokenKind::Print,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_trailing_newline_is_appended() {
        assert_eq!(
            kinds("PRINT x"),
            vec![
                TokenKind::Print,
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_bang_without_equals() {
        assert_eq!(
            first_error("IF a ! b THEN"),
            LexError::ExpectedNotEqual { found: Some(' ') }
        );
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(first_error("LET x = 1 ; "), LexError::UnknownToken { ch: ';' });
        assert_eq!(first_error("LET my_var = 1"), LexError::UnknownToken { ch: '_' });
    }

    #[test]
    fn test_eof_is_repeated() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

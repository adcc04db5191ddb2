//! Expression parsing and emission
//!
//! ```text
//! comparison ::= expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+
//! expression ::= term {("+" | "-") term}
//! term       ::= unary {("*" | "/") unary}
//! unary      ::= ["+" | "-"] primary
//! primary    ::= NUMBER | IDENT
//! ```
//!
//! Operators are copied to the output token by token, so the generated C
//! evaluates them with C's own precedence rules. Operands go through
//! [`emitter::number`] and [`emitter::variable`], which keeps every
//! subexpression in floating point.

use crate::compiler::emitter;
use crate::compiler::errors::{CompileError, ParseError};
use crate::compiler::parse::Parser;
use crate::compiler::token::TokenKind;

impl Parser<'_> {
    /// At least one comparison operator is required.
    pub(crate) fn comparison(&mut self) -> Result<(), CompileError> {
        self.expression()?;

        if !self.current.kind.is_comparison_operator() {
            return Err(ParseError::ExpectedComparison {
                found: self.current.clone(),
            }
            .into());
        }

        while self.current.kind.is_comparison_operator() {
            self.emit_operator()?;
            self.expression()?;
        }

        Ok(())
    }

    pub(crate) fn expression(&mut self) -> Result<(), CompileError> {
        self.term()?;

        while matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            self.emit_operator()?;
            self.term()?;
        }

        Ok(())
    }

    fn term(&mut self) -> Result<(), CompileError> {
        self.unary()?;

        while matches!(self.current.kind, TokenKind::Asterisk | TokenKind::Slash) {
            self.emit_operator()?;
            self.unary()?;
        }

        Ok(())
    }

    fn unary(&mut self) -> Result<(), CompileError> {
        if matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            // `a - -b` must not come out as `a--b`.
            if self.emitter.code().ends_with(self.current.text.as_str()) {
                self.emitter.emit(" ");
            }
            self.emit_operator()?;
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<(), CompileError> {
        let text = match self.current.kind {
            TokenKind::Number => emitter::number(&self.current.text),
            TokenKind::Ident => {
                if !self.symbols.contains(&self.current.text) {
                    return Err(ParseError::UndeclaredVariable {
                        name: self.current.text.clone(),
                    }
                    .into());
                }
                emitter::variable(&self.current.text)
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    found: self.current.clone(),
                }
                .into());
            }
        };

        self.emitter.emit(&text);
        self.next_token()?;
        Ok(())
    }

    /// Copy the current token's text to the output and move past it.
    fn emit_operator(&mut self) -> Result<(), CompileError> {
        self.emitter.emit(&self.current.text);
        self.next_token()?;
        Ok(())
    }
}

//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct: its token window, the name
//! sets it validates against, the helper methods shared by all productions,
//! and the top-level [`Parser::program`] entry point.
//!
//! # Parser Architecture
//!
//! Parsing and code generation are fused. Each production checks the grammar
//! and pushes C text into the [`Emitter`] as soon as the matching fragment is
//! known; there is no syntax tree.
//! - This module: Parser struct, helper methods, `program`
//! - `statements`: `statement` and `nl`
//! - `expressions`: `comparison`, `expression`, `term`, `unary`, `primary`
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! the same way the productions are split in the grammar.

use crate::compiler::emitter::Emitter;
use crate::compiler::errors::{CompileError, LexError, ParseError};
use crate::compiler::lexer::Lexer;
use crate::compiler::symbols::NameSet;
use crate::compiler::token::{Token, TokenKind};

/// Recursive descent parser with a two-token window
pub struct Parser<'e> {
    lexer: Lexer,
    pub(crate) emitter: &'e mut Emitter,
    pub(crate) current: Token,
    pub(crate) lookahead: Token,

    /// Variables introduced by LET or INPUT
    pub(crate) symbols: NameSet,
    /// Names seen in LABEL statements
    pub(crate) labels_declared: NameSet,
    /// Names seen in GOTO statements, checked once the whole program is read
    pub(crate) labels_gotoed: NameSet,
}

impl<'e> Parser<'e> {
    /// Bind a parser to its lexer and emitter and pre-fetch two tokens.
    pub fn new(mut lexer: Lexer, emitter: &'e mut Emitter) -> Result<Self, CompileError> {
        let current = lexer.next_token()?;
        let lookahead = lexer.next_token()?;
        Ok(Self {
            lexer,
            emitter,
            current,
            lookahead,
            symbols: NameSet::new(),
            labels_declared: NameSet::new(),
            labels_gotoed: NameSet::new(),
        })
    }

    /// program ::= {NEWLINE} {statement} EOF
    pub fn program(&mut self) -> Result<(), CompileError> {
        self.emitter.header_line("#include <stdio.h>");
        self.emitter.header_line("int main(void){");

        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }

        while !self.check_token(TokenKind::Eof) {
            self.statement()?;
        }

        self.emitter.emit_line("return 0;");
        self.emitter.emit_line("}");

        // Forward GOTOs are legal, so targets can only be checked now.
        if let Some(label) = self
            .labels_gotoed
            .iter()
            .find(|label| !self.labels_declared.contains(label))
        {
            return Err(ParseError::UndeclaredLabel {
                name: label.to_string(),
            }
            .into());
        }

        Ok(())
    }

    pub fn declared_symbols(&self) -> &NameSet {
        &self.symbols
    }

    pub fn declared_labels(&self) -> &NameSet {
        &self.labels_declared
    }

    pub fn referenced_labels(&self) -> &NameSet {
        &self.labels_gotoed
    }

    // ===== Helper methods =====

    /// Is the current token of this kind?
    pub(crate) fn check_token(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Is the lookahead token of this kind?
    #[cfg(test)]
    pub(crate) fn check_peek(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Require the current token to be of `kind`, then advance past it.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if !self.check_token(kind) {
            return Err(ParseError::ExpectedKind {
                expected: kind,
                found: self.current.clone(),
            }
            .into());
        }
        self.next_token()?;
        Ok(())
    }

    /// Require an identifier and return its text.
    pub(crate) fn expect_identifier(&mut self) -> Result<String, CompileError> {
        let name = self.current.text.clone();
        self.match_token(TokenKind::Ident)?;
        Ok(name)
    }

    /// Slide the window: drop the current token, promote the lookahead and
    /// pull a fresh one from the lexer.
    pub(crate) fn next_token(&mut self) -> Result<(), LexError> {
        let fresh = self.lexer.next_token()?;
        self.current = std::mem::replace(&mut self.lookahead, fresh);
        Ok(())
    }
}

//! Statement parsing and emission
//!
//! # Grammar
//!
//! ```text
//! statement ::= "PRINT" (string | expression) nl
//!             | "IF" comparison "THEN" nl {statement} "ENDIF" nl
//!             | "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE" nl
//!             | "LABEL" ident nl
//!             | "GOTO" ident nl
//!             | "LET" ident "=" expression nl
//!             | "INPUT" ident nl
//! nl        ::= NEWLINE {NEWLINE}
//! ```
//!
//! Every variable is a `float` declared once, in the header section, the
//! first time a LET or INPUT names it. Variables and labels are written
//! under their prefixed C names (see [`emitter::variable`]).

use crate::compiler::emitter;
use crate::compiler::errors::{CompileError, ParseError};
use crate::compiler::parse::Parser;
use crate::compiler::token::TokenKind;

impl Parser<'_> {
    /// Parse one statement, including its trailing newline(s).
    pub(crate) fn statement(&mut self) -> Result<(), CompileError> {
        match self.current.kind {
            TokenKind::Print => self.print_statement()?,
            TokenKind::If => self.if_statement()?,
            TokenKind::While => self.while_statement()?,
            TokenKind::Label => self.label_statement()?,
            TokenKind::Goto => self.goto_statement()?,
            TokenKind::Let => self.let_statement()?,
            TokenKind::Input => self.input_statement()?,
            _ => {
                return Err(ParseError::InvalidStatement {
                    found: self.current.clone(),
                }
                .into());
            }
        }

        self.nl()
    }

    fn print_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;

        if self.check_token(TokenKind::String) {
            let line = format!("printf(\"{}\\n\");", self.current.text);
            self.emitter.emit_line(&line);
            self.next_token()?;
        } else {
            self.emitter.emit("printf(\"%.2f\\n\", (float)(");
            self.expression()?;
            self.emitter.emit_line("));");
        }

        Ok(())
    }

    fn if_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        self.emitter.emit("if(");
        self.comparison()?;
        self.match_token(TokenKind::Then)?;
        self.nl()?;
        self.emitter.emit_line("){");

        self.block_until(TokenKind::Endif)?;

        self.match_token(TokenKind::Endif)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    fn while_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        self.emitter.emit("while(");
        self.comparison()?;
        self.match_token(TokenKind::Repeat)?;
        self.nl()?;
        self.emitter.emit_line("){");

        self.block_until(TokenKind::Endwhile)?;

        self.match_token(TokenKind::Endwhile)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    /// Statements up to (not including) the closing keyword. Running into
    /// EOF first surfaces as an invalid statement.
    fn block_until(&mut self, end: TokenKind) -> Result<(), CompileError> {
        while !self.check_token(end) {
            self.statement()?;
        }
        Ok(())
    }

    fn label_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let name = self.expect_identifier()?;

        if !self.labels_declared.insert(&name) {
            return Err(ParseError::DuplicateLabel { name }.into());
        }

        // `;` keeps the label valid when it ends a C block.
        self.emitter
            .emit_line(&format!("{}:;", emitter::label(&name)));
        Ok(())
    }

    fn goto_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let name = self.expect_identifier()?;

        self.labels_gotoed.insert(&name);
        self.emitter
            .emit_line(&format!("goto {};", emitter::label(&name)));
        Ok(())
    }

    fn let_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let name = self.expect_identifier()?;
        self.match_token(TokenKind::Eq)?;

        self.emitter
            .emit(&format!("{} = ", emitter::variable(&name)));
        self.expression()?;
        self.emitter.emit_line(";");

        // Declared only after the right-hand side, so `LET x = x` cannot
        // introduce `x`.
        self.declare(&name);
        Ok(())
    }

    fn input_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let name = self.expect_identifier()?;
        self.declare(&name);

        // Anything but one converted value, EOF included, zeroes the
        // variable and drops the rest of the line.
        let target = emitter::variable(&name);
        self.emitter
            .emit_line(&format!("if(1 != scanf(\"%f\", &{})) {{", target));
        self.emitter.emit_line(&format!("{} = 0;", target));
        self.emitter.emit_line("scanf(\"%*[^\\n]\");");
        self.emitter.emit_line("}");
        Ok(())
    }

    /// Register a variable and declare it in the header the first time.
    fn declare(&mut self, name: &str) {
        if self.symbols.insert(name) {
            self.emitter
                .header_line(&format!("float {};", emitter::variable(name)));
        }
    }

    /// nl ::= NEWLINE {NEWLINE}
    pub(crate) fn nl(&mut self) -> Result<(), CompileError> {
        self.match_token(TokenKind::Newline)?;
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::emitter::Emitter;
    use crate::compiler::errors::{CompileError, ParseError};
    use crate::compiler::lexer::Lexer;
    use crate::compiler::parse::Parser;
    use crate::compiler::token::{Token, TokenKind};

    /// Compile and return only the body section.
    fn body(source: &str) -> Result<String, CompileError> {
        let mut emitter = Emitter::new();
        let mut parser = Parser::new(Lexer::new(source), &mut emitter)?;
        parser.program()?;
        Ok(emitter.code().to_string())
    }

    fn header(source: &str) -> String {
        let mut emitter = Emitter::new();
        let mut parser = Parser::new(Lexer::new(source), &mut emitter).unwrap();
        parser.program().unwrap();
        emitter.header().to_string()
    }

    #[test]
    fn test_print_string() {
        assert_eq!(
            body("PRINT \"hello world\"\n").unwrap(),
            "printf(\"hello world\\n\");\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_print_expression() {
        assert_eq!(
            body("LET a = 2\nPRINT a * 3 + 1\n").unwrap(),
            "v_a = 2.0;\nprintf(\"%.2f\\n\", (float)(v_a*3.0+1.0));\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_if_block() {
        let code = body("LET a = 1\nIF a >= 1 THEN\nPRINT \"yes\"\nENDIF\n").unwrap();
        assert_eq!(
            code,
            "v_a = 1.0;\nif(v_a>=1.0){\nprintf(\"yes\\n\");\n}\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_nested_while_and_if() {
        let source = "LET n = 3\n\
                      WHILE n > 0 REPEAT\n\
                      IF n == 2 THEN\n\
                      PRINT n\n\
                      ENDIF\n\
                      LET n = n - 1\n\
                      ENDWHILE\n";
        let code = body(source).unwrap();
        assert_eq!(
            code,
            "v_n = 3.0;\nwhile(v_n>0.0){\nif(v_n==2.0){\nprintf(\"%.2f\\n\", (float)(v_n));\n}\nv_n = v_n-1.0;\n}\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_label_and_goto() {
        assert_eq!(
            body("LABEL top\nGOTO top\n").unwrap(),
            "l_top:;\ngoto l_top;\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_forward_goto_is_legal() {
        assert!(body("GOTO done\nPRINT \"skipped\"\nLABEL done\n").is_ok());
    }

    #[test]
    fn test_duplicate_label() {
        let err = body("LABEL loop\nLABEL loop\n").unwrap_err();
        assert_eq!(
            err,
            CompileError::Parse(ParseError::DuplicateLabel {
                name: "loop".to_string()
            })
        );
    }

    #[test]
    fn test_goto_to_missing_label() {
        let err = body("GOTO nowhere\n").unwrap_err();
        assert_eq!(
            err,
            CompileError::Parse(ParseError::UndeclaredLabel {
                name: "nowhere".to_string()
            })
        );
    }

    #[test]
    fn test_let_declares_once() {
        let source = "LET x = 5\nLET x = x + 1\nINPUT x\n";
        assert_eq!(
            header(source),
            "#include <stdio.h>\nint main(void){\nfloat v_x;\n"
        );
    }

    #[test]
    fn test_let_cannot_reference_itself_first() {
        let err = body("LET x = x + 1\n").unwrap_err();
        assert_eq!(
            err,
            CompileError::Parse(ParseError::UndeclaredVariable {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn test_input_has_fallback() {
        let code = body("INPUT n\n").unwrap();
        assert_eq!(
            code,
            "if(1 != scanf(\"%f\", &v_n)) {\nv_n = 0;\nscanf(\"%*[^\\n]\");\n}\nreturn 0;\n}\n"
        );
        assert!(header("INPUT n\n").ends_with("float v_n;\n"));
    }

    #[test]
    fn test_input_fallback_covers_eof_and_whole_line() {
        let code = body("INPUT n\n").unwrap();
        // scanf returns EOF (-1) at end of input, so 0 alone is not enough.
        assert!(code.contains("if(1 != scanf("));
        assert!(!code.contains("0 == scanf"));
        // `%*s` would only skip one word of a bad line.
        assert!(code.contains("scanf(\"%*[^\\n]\");"));
        assert!(!code.contains("%*s"));
    }

    #[test]
    fn test_c_reserved_words_are_usable_names() {
        let source = "LET int = 1\nLET printf = int\nINPUT return\nLABEL while\nGOTO while\n";
        let code = body(source).unwrap();
        assert!(code.contains("v_int = 1.0;\n"));
        assert!(code.contains("v_printf = v_int;\n"));
        assert!(code.contains("&v_return"));
        assert!(code.contains("l_while:;\ngoto l_while;\n"));
        assert_eq!(
            header(source),
            "#include <stdio.h>\nint main(void){\nfloat v_int;\nfloat v_printf;\nfloat v_return;\n"
        );
    }

    #[test]
    fn test_invalid_statement() {
        let err = body("LET a = 1\na = 2\n").unwrap_err();
        assert_eq!(
            err,
            CompileError::Parse(ParseError::InvalidStatement {
                found: Token::new("a", TokenKind::Ident)
            })
        );
    }

    #[test]
    fn test_missing_then() {
        let err = body("LET a = 1\nIF a > 0\nENDIF\n").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parse(ParseError::ExpectedKind {
                expected: TokenKind::Then,
                ..
            })
        ));
    }

    #[test]
    fn test_unclosed_block_hits_eof() {
        let err = body("LET a = 1\nWHILE a < 2 REPEAT\nLET a = a + 1\n").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parse(ParseError::InvalidStatement { found })
                if found.kind == TokenKind::Eof
        ));
    }

    #[test]
    fn test_statement_requires_newline() {
        let err = body("PRINT \"a\" PRINT \"b\"\n").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parse(ParseError::ExpectedKind {
                expected: TokenKind::Newline,
                ..
            })
        ));
    }

    #[test]
    fn test_label_requires_identifier() {
        let err = body("LABEL 10\n").unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parse(ParseError::ExpectedKind {
                expected: TokenKind::Ident,
                ..
            })
        ));
    }
}

//! # Introduction
//!
//! teenyc compiles a tiny line-oriented BASIC dialect into C source text.
//! Lexing, parsing and code generation happen in one pass; the output is a
//! single `main` function that any C compiler can build.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser ⇄ Emitter → C source
//! ```
//!
//! 1. [`compiler::lexer`] — pulls tokens out of the source on demand.
//! 2. [`compiler::parse`] — checks the grammar, tracks declared variables and
//!    labels, and pushes C fragments into the emitter as it goes.
//! 3. [`compiler::emitter`] — keeps declarations and statements apart and
//!    joins them, declarations first, at the end.
//! 4. [`ui`] — ratatui viewer showing source and generated C side by side;
//!    not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let c = teenyc::compile("LET x = 2\nPRINT x * 21\n").unwrap();
//! assert!(c.contains("float v_x;"));
//! assert!(c.contains("printf(\"%.2f\\n\", (float)(v_x*21.0));"));
//! ```

pub mod compiler;
pub mod ui;

use compiler::emitter::Emitter;
use compiler::errors::CompileError;
use compiler::lexer::Lexer;
use compiler::parse::Parser;

/// Compile a whole program and return the generated C.
///
/// Stops at the first lexing or parsing error.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let mut emitter = Emitter::new();
    let mut parser = Parser::new(Lexer::new(source), &mut emitter)?;
    parser.program()?;
    Ok(emitter.finalize())
}

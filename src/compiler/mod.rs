//! BASIC-to-C compiler
//!
//! This module turns program text into C source in a single pass:
//! - [`lexer`]: Tokenization (source text → tokens, pulled on demand)
//! - [`token`]: Token kinds shared by the lexer and the parser
//! - [`parse`]: Parser state and the `program` entry point
//! - [`emitter`]: Two-section output buffer (header, body)
//! - [`symbols`]: Ordered name sets for variables and labels
//! - [`errors`]: Lexing and parsing errors
//!
//! # Supported Language
//!
//! One statement per line:
//! - `PRINT` of a string literal or an expression
//! - `LET` assignment and `INPUT` of a number
//! - `IF ... THEN ... ENDIF` and `WHILE ... REPEAT ... ENDWHILE`
//! - `LABEL` and `GOTO`
//!
//! Every variable is a single-precision float. Comments start with `#`.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with two tokens of lookahead that
//! emits C while it recognises the grammar. No syntax tree is built and no
//! parser generator is involved.

pub mod emitter;
pub mod errors;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod symbols;
pub mod token;

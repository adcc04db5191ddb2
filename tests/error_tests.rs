// Every fault stops the compilation and comes back as a value

use teenyc::compiler::errors::{CompileError, LexError, ParseError};
use teenyc::compiler::token::TokenKind;

fn compile_err(source: &str) -> CompileError {
    teenyc::compile(source).expect_err("compilation should fail")
}

#[test]
fn test_goto_undeclared_label() {
    let err = compile_err("LET a = 1\nGOTO target\nPRINT a\n");
    assert_eq!(
        err,
        CompileError::Parse(ParseError::UndeclaredLabel {
            name: "target".to_string()
        })
    );
    assert_eq!(
        err.to_string(),
        "Parsing error: Attempting to GOTO to an undeclared label: target"
    );
}

#[test]
fn test_goto_label_declared_later() {
    assert!(teenyc::compile("GOTO target\nLABEL target\n").is_ok());
    assert!(teenyc::compile("LABEL target\nGOTO target\n").is_ok());
}

#[test]
fn test_undeclared_label_order_is_first_goto() {
    let err = compile_err("GOTO zeta\nGOTO alpha\nLABEL other\n");
    assert_eq!(
        err,
        CompileError::Parse(ParseError::UndeclaredLabel {
            name: "zeta".to_string()
        })
    );
}

#[test]
fn test_duplicate_label_reported_before_end() {
    // The duplicate wins over the later undeclared GOTO target.
    let err = compile_err("LABEL loop\nLABEL loop\nGOTO nowhere\n");
    assert_eq!(
        err,
        CompileError::Parse(ParseError::DuplicateLabel {
            name: "loop".to_string()
        })
    );
}

#[test]
fn test_variable_before_assignment() {
    let err = compile_err("PRINT total\n");
    assert_eq!(
        err.to_string(),
        "Parsing error: Referencing a variable before assignment: total"
    );
}

#[test]
fn test_use_before_later_assignment() {
    let err = compile_err("PRINT x\nLET x = 1\n");
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UndeclaredVariable { .. })
    ));
}

#[test]
fn test_condition_without_comparison() {
    let err = compile_err("LET a = 1\nWHILE a REPEAT\nENDWHILE\n");
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::ExpectedComparison { found }) if found.kind == TokenKind::Repeat
    ));
}

#[test]
fn test_lex_errors_surface_through_compile() {
    assert_eq!(
        compile_err("PRINT \"50%\"\n"),
        CompileError::Lex(LexError::IllegalStringCharacter { ch: '%' })
    );
    assert_eq!(
        compile_err("LET a = 3.\n"),
        CompileError::Lex(LexError::MalformedNumber {
            text: "3.".to_string()
        })
    );
    assert_eq!(
        compile_err("LET a = 1 & 2\n"),
        CompileError::Lex(LexError::UnknownToken { ch: '&' })
    );
}

#[test]
fn test_first_error_in_scan_order_wins() {
    // The parse error on line 1 comes before the lex error on line 2.
    let err = compile_err("PRINT y\nPRINT \"bad%\"\n");
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UndeclaredVariable { .. })
    ));
}

#[test]
fn test_lowercase_keyword_is_not_a_statement() {
    let err = compile_err("print \"hi\"\n");
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::InvalidStatement { found }) if found.text == "print"
    ));
}

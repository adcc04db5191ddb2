//! Token vocabulary shared by the lexer and the parser.

use std::fmt;

/// Every category of token the lexer can produce.
///
/// The variants fall into four families: end markers, literals, keywords and
/// operators. Keywords are only ever produced through [`TokenKind::keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // End markers
    Eof,
    Newline,

    // Literals
    Number,
    Ident,
    String,

    // Keywords
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    Endif,
    While,
    Repeat,
    Endwhile,

    // Operators
    Eq,       // =
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    EqEq,     // ==
    NotEq,    // !=
    Lt,       // <
    LtEq,     // <=
    Gt,       // >
    GtEq,     // >=
}

const KEYWORDS: [TokenKind; 11] = [
    TokenKind::Label,
    TokenKind::Goto,
    TokenKind::Print,
    TokenKind::Input,
    TokenKind::Let,
    TokenKind::If,
    TokenKind::Then,
    TokenKind::Endif,
    TokenKind::While,
    TokenKind::Repeat,
    TokenKind::Endwhile,
];

impl TokenKind {
    /// Upper-case name of the kind, as used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Label => "LABEL",
            TokenKind::Goto => "GOTO",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Endif => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Endwhile => "ENDWHILE",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
        }
    }

    /// Reverse lookup from an identifier-shaped lexeme to a keyword.
    ///
    /// Matching is exact and case-sensitive: `PRINT` is a keyword, `print`
    /// and `PRINTX` are identifiers. Only keyword kinds can be returned, so
    /// lexemes such as `EOF` or `NUMBER` stay identifiers.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.into_iter().find(|kind| kind.name() == text)
    }

    /// `==`, `!=`, `<`, `<=`, `>`, `>=`
    pub fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme. `text` is the exact source text, except for string
/// literals (quotes stripped) and the end markers (`"\n"` and `""`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof | TokenKind::Newline => write!(f, "{}", self.kind),
            _ => write!(f, "{} '{}'", self.kind, self.text),
        }
    }
}

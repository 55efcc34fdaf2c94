//! Token definitions for PL/0.
//!
//! A [`Token`] is a classified slice of source: its [`TokenKind`], an owned
//! copy of the text it was scanned from, and the [`Span`] where it starts.

use std::fmt;

use pl0c_util::Span;

/// The closed set of PL/0 token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Name of a constant, variable or procedure.
    Identifier,
    /// Unsigned decimal integer literal.
    Number,

    // Keywords
    /// `const`
    Const,
    /// `var`
    Var,
    /// `procedure`
    Procedure,
    /// `call`
    Call,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `if`
    If,
    /// `then`
    Then,
    /// `while`
    While,
    /// `do`
    Do,
    /// `odd`
    Odd,

    // Operators
    /// `:=`
    Assign,
    /// `=`
    Equal,
    /// `#`
    Hash,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `.`, also produced at end of input
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

/// Reserved words, in the order the grammar introduces them.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("const", TokenKind::Const),
    ("var", TokenKind::Var),
    ("procedure", TokenKind::Procedure),
    ("call", TokenKind::Call),
    ("begin", TokenKind::Begin),
    ("end", TokenKind::End),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("odd", TokenKind::Odd),
];

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use pl0c_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whiles"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Kind for a character that forms a token on its own.
    ///
    /// `:` is not included: it only appears as the first half of `:=`.
    pub fn from_single_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Equal,
            '#' => TokenKind::Hash,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case name used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Const => "CONST",
            TokenKind::Var => "VAR",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Call => "CALL",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Odd => "ODD",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::Hash => "HASH",
            TokenKind::LessThan => "LESS-THAN",
            TokenKind::GreaterThan => "GREATER-THAN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LeftParen => "LEFT-PAREN",
            TokenKind::RightParen => "RIGHT-PAREN",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub text: String,
    /// Byte range and start location.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Line the token starts on (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// True for the Dot the lexer synthesizes when input runs out.
    ///
    /// A `.` written in the source covers one byte; the synthesized one covers
    /// none.
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::Dot && self.span.is_empty()
    }
}

/// Formats as one line of the token dump: `<line>:\t<kind>, <text>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{}, {}", self.line(), self.kind, self.text)
    }
}

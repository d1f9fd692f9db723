//! Token model produced by the scanner.

use std::fmt;

/// Kind of a token, with the identifier name as the only payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `1`
    True,
    /// `0`
    False,
    /// `?`
    Unknown,
    /// `&`
    And,
    /// `+`
    Or,
    /// `!`
    Not,
    /// `=`
    Assign,
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
    /// `;`
    Separator,
    /// `->`
    Imply,
    /// `write` followed by its mandatory space.
    Write,
    /// Variable name.
    Ident(String),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Upper-case tag name, as shown in token dumps.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Imply => "IMPLY",
            TokenKind::Write => "WRITE",
            TokenKind::Ident(_) => "ID",
            TokenKind::Eof => "EOF",
        }
    }

    /// Source spelling of a fixed token.
    ///
    /// Returns `None` for identifiers (spelling varies) and `Eof`.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            TokenKind::True => Some("1"),
            TokenKind::False => Some("0"),
            TokenKind::Unknown => Some("?"),
            TokenKind::And => Some("&"),
            TokenKind::Or => Some("+"),
            TokenKind::Not => Some("!"),
            TokenKind::Assign => Some("="),
            TokenKind::LeftBracket => Some("("),
            TokenKind::RightBracket => Some(")"),
            TokenKind::Separator => Some(";"),
            TokenKind::Imply => Some("->"),
            TokenKind::Write => Some("write "),
            TokenKind::Ident(_) | TokenKind::Eof => None,
        }
    }

    /// Identifier name, if this is an identifier.
    pub fn ident_name(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "ID({name})"),
            other => f.write_str(other.display_name()),
        }
    }
}

/// Half-open byte range `start..end` in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Empty span at `pos`.
    pub const fn point(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

//! Language variants the scanner understands.
//!
//! Both variants share the literals and connectives. They differ in what
//! counts as a variable and whether statements (`=`, `;`, brackets,
//! `write`, `->`) exist at all.

use std::fmt;

use crate::TokenKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Bare three-valued expressions over the variables `k` and `n`.
    Propositional,
    /// Assignments, `write` statements, implication, brackets, and
    /// lowercase variable names of any length.
    #[default]
    Imperative,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Propositional, Dialect::Imperative];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Propositional => "propositional",
            Dialect::Imperative => "imperative",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Token for a byte that is a complete token on its own.
    pub fn single_char_token(self, byte: u8) -> Option<TokenKind> {
        let kind = match byte {
            b'1' => TokenKind::True,
            b'0' => TokenKind::False,
            b'?' => TokenKind::Unknown,
            b'&' => TokenKind::And,
            b'+' => TokenKind::Or,
            b'!' => TokenKind::Not,
            b'=' | b'(' | b')' | b';' if self == Dialect::Propositional => return None,
            b'=' => TokenKind::Assign,
            b'(' => TokenKind::LeftBracket,
            b')' => TokenKind::RightBracket,
            b';' => TokenKind::Separator,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether the multi-character tokens (`write `, `->`) exist.
    pub fn has_statements(self) -> bool {
        self == Dialect::Imperative
    }

    /// Whether `byte` can begin a variable name.
    pub fn is_ident_start(self, byte: u8) -> bool {
        match self {
            Dialect::Propositional => matches!(byte, b'k' | b'n'),
            Dialect::Imperative => byte.is_ascii_lowercase(),
        }
    }

    /// Whether `byte` can extend a variable name past its first letter.
    pub fn is_ident_continue(self, byte: u8) -> bool {
        match self {
            Dialect::Propositional => false,
            Dialect::Imperative => byte.is_ascii_lowercase() || byte == b'_',
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

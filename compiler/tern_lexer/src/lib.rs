//! Scanner for Tern, a small three-valued logic language.
//!
//! Turns a byte stream into [`Token`]s one at a time:
//!
//! ```text
//! k = !(1 & ?); write k -> n
//! ```
//!
//! becomes `ID(k) ASSIGN NOT LBRACKET TRUE AND UNKNOWN RBRACKET SEPARATOR
//! WRITE ID(k) IMPLY ID(n) EOF`.
//!
//! The scanner pulls bytes through a [`RewindCursor`](tern_lexer_core::RewindCursor)
//! so it can try the longer `write ` and `->` tokens and back out cleanly
//! when they do not match. See [`scanner`] for the details.

mod dialect;
mod lex_error;
pub mod scanner;
mod token;

pub use dialect::Dialect;
pub use lex_error::LexError;
pub use scanner::{tokenize, Scanner, MAX_TOKEN_LEN};
pub use token::{Span, Token, TokenKind};

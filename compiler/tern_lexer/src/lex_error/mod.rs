//! Fatal scanner errors.
//!
//! Every error ends the token stream. There is no recovery: the scanner
//! reports what it saw and where, and the caller stops asking for tokens.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    /// Input that no rule accepts.
    ///
    /// `found` is the run of bytes the scanner had seen but not tokenized
    /// (the offending byte, plus any bytes buffered for replay), oldest
    /// first, escaped for display.
    #[error("invalid character(s) \"{found}\" at byte {position}")]
    InvalidCharacter { found: String, position: u32 },

    /// A byte that only ever starts one fixed token, without the rest of
    /// that token after it.
    #[error("malformed token at byte {position}: `{lead}` can only start `{expected}`")]
    MalformedToken {
        lead: char,
        expected: &'static str,
        position: u32,
    },

    /// The character source failed.
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

impl LexError {
    pub(crate) fn invalid(run: &[u8], position: u32) -> Self {
        LexError::InvalidCharacter {
            found: run.escape_ascii().to_string(),
            position,
        }
    }

    /// Byte offset the error points at, if it is a lexical error.
    pub fn position(&self) -> Option<u32> {
        match self {
            LexError::InvalidCharacter { position, .. }
            | LexError::MalformedToken { position, .. } => Some(*position),
            LexError::Io(_) => None,
        }
    }
}

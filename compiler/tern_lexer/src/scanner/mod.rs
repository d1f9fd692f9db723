//! Backtracking scanner.
//!
//! Single-byte tokens are dispatched directly. The two multi-byte tokens,
//! `write ` and `->`, are matched speculatively: the scanner consumes the
//! expected bytes one at a time and, on the first mismatch, rewinds the
//! cursor by exactly the number it consumed. What happens next depends on
//! the lead byte:
//!
//! - `w` is also a variable name start, so the scanner re-reads the same
//!   bytes as an identifier.
//! - `-` starts nothing else, so a missing `>` is a [`LexError::MalformedToken`].
//!
//! Whitespace between tokens is skipped and never part of a token's span.
//! The only state kept between calls is the cursor.

use std::io::Read;
use std::iter::FusedIterator;

use tern_lexer_core::{CharSource, HistoryLimit, ReadSource, RewindCursor};
use tracing::{debug, trace};

use crate::{Dialect, LexError, Span, Token, TokenKind};

/// Spelling of the `write` keyword, including its mandatory space.
const WRITE: &[u8] = b"write ";
/// Spelling of implication.
const IMPLY: &[u8] = b"->";

/// Length of the longest fixed token.
///
/// A failed speculative match rewinds at most `MAX_TOKEN_LEN - 1` bytes,
/// so this is all the history the scanner's cursor needs to retain.
pub const MAX_TOKEN_LEN: usize = WRITE.len();

/// Pull-based scanner over a [`CharSource`].
pub struct Scanner<S> {
    cursor: RewindCursor<S>,
    dialect: Dialect,
    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl<S: CharSource> Scanner<S> {
    /// Scanner for the imperative dialect.
    pub fn new(source: S) -> Result<Self, LexError> {
        Self::with_dialect(source, Dialect::default())
    }

    /// Prime the cursor with the first byte of `source`.
    pub fn with_dialect(source: S, dialect: Dialect) -> Result<Self, LexError> {
        let cursor = RewindCursor::init_with_limit(source, HistoryLimit::Bounded(MAX_TOKEN_LEN))?;
        Ok(Self {
            cursor,
            dialect,
            finished: false,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Read-only view of the cursor, for diagnostics.
    pub fn cursor(&self) -> &RewindCursor<S> {
        &self.cursor
    }

    /// Recognize and return the next token.
    ///
    /// Returns `Eof` once the input is exhausted; calling again keeps
    /// returning `Eof`. Any error is fatal: the scanner state after an error
    /// is unspecified and no further tokens should be requested.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.cursor.position();
            let Some(byte) = self.cursor.current() else {
                return Ok(self.emit(TokenKind::Eof, start));
            };

            if matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
                self.cursor.advance()?;
                continue;
            }

            if let Some(kind) = self.dialect.single_char_token(byte) {
                self.cursor.advance()?;
                return Ok(self.emit(kind, start));
            }

            return match byte {
                b'w' if self.dialect.has_statements() => self.write_or_ident(start),
                b'-' if self.dialect.has_statements() => self.imply(start),
                b if self.dialect.is_ident_start(b) => self.ident(b, start),
                _ => Err(self.invalid_character()),
            };
        }
    }

    fn emit(&self, kind: TokenKind, start: u32) -> Token {
        let span = Span::new(start, self.cursor.position());
        trace!(kind = kind.display_name(), start = span.start, end = span.end, "token");
        Token::new(kind, span)
    }

    // ─── Speculative tokens ─────────────────────────────────────────

    /// Try to match `tail` after the lead byte the cursor is on.
    ///
    /// On success the cursor ends one past the last byte of `tail`. On
    /// failure it is back on the lead byte with everything it consumed
    /// queued for replay.
    fn speculate(&mut self, tail: &[u8]) -> Result<bool, LexError> {
        for (consumed, &expected) in (1..).zip(tail) {
            self.cursor.advance()?;
            if self.cursor.current() != Some(expected) {
                self.cursor.rewind_by(consumed);
                return Ok(false);
            }
        }
        self.cursor.advance()?;
        Ok(true)
    }

    fn write_or_ident(&mut self, start: u32) -> Result<Token, LexError> {
        if self.speculate(&WRITE[1..])? {
            return Ok(self.emit(TokenKind::Write, start));
        }
        debug!(position = start, "no `write` keyword, reading identifier");
        self.ident(b'w', start)
    }

    fn imply(&mut self, start: u32) -> Result<Token, LexError> {
        if self.speculate(&IMPLY[1..])? {
            return Ok(self.emit(TokenKind::Imply, start));
        }
        debug!(position = start, "`-` not followed by `>`");
        Err(LexError::MalformedToken {
            lead: '-',
            expected: "->",
            position: start,
        })
    }

    // ─── Identifiers ────────────────────────────────────────────────

    /// Read a variable name whose first byte `lead` the cursor is on.
    ///
    /// Stops on the first byte that cannot continue a name. That byte is
    /// left current, so the next call sees it.
    fn ident(&mut self, lead: u8, start: u32) -> Result<Token, LexError> {
        let dialect = self.dialect;
        let mut name = String::from(char::from(lead));
        self.cursor.advance()?;
        while let Some(byte) = self
            .cursor
            .current()
            .filter(|&b| dialect.is_ident_continue(b))
        {
            name.push(char::from(byte));
            self.cursor.advance()?;
        }
        Ok(self.emit(TokenKind::Ident(name), start))
    }

    fn invalid_character(&self) -> LexError {
        LexError::invalid(&self.cursor.lookahead_run(), self.cursor.position())
    }
}

impl<R: Read> Scanner<ReadSource<R>> {
    /// Scanner reading bytes from `reader`.
    pub fn from_reader(reader: R, dialect: Dialect) -> Result<Self, LexError> {
        Self::with_dialect(ReadSource::new(reader), dialect)
    }
}

/// Yields tokens up to and including `Eof`, or up to and including the
/// first error, then stops.
impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = !matches!(&result, Ok(token) if !token.kind.is_eof());
        Some(result)
    }
}

impl<S: CharSource> FusedIterator for Scanner<S> {}

/// Scan all of `reader`. The returned tokens end with `Eof`.
pub fn tokenize<R: Read>(reader: R, dialect: Dialect) -> Result<Vec<Token>, LexError> {
    Scanner::from_reader(reader, dialect)?.collect()
}

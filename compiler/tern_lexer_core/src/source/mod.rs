//! Forward-only character sources.
//!
//! A source hands out one byte per call and reports end of input as
//! `Ok(None)`. Sources are read-once: the cursor never asks for a byte it
//! has already received, it replays its own copy instead.

use std::io::{self, Read};

/// A forward-only, read-once stream of input bytes.
pub trait CharSource {
    /// Pull the next byte.
    ///
    /// Returns `Ok(None)` at end of input. Once `None` has been returned,
    /// implementations must keep returning it.
    fn next_char(&mut self) -> io::Result<Option<u8>>;
}

/// Adapts any [`Read`] into a [`CharSource`].
///
/// Reads exactly one byte per call, so wrap unbuffered handles (files,
/// sockets) in a [`BufReader`](std::io::BufReader) first. `StdinLock` and
/// byte slices are already cheap to read from.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    /// Set once the reader has reported end of input.
    exhausted: bool,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    /// Returns `true` once the underlying reader has reported end of input.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Recover the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    // A terminal can produce more bytes after Ctrl-D; the
                    // scanner treats the first EOF as final.
                    self.exhausted = true;
                    return Ok(None);
                }
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        (**self).next_char()
    }
}

//! Rewindable cursor over a forward-only [`CharSource`].
//!
//! The cursor keeps three pieces of state:
//!
//! - **history**: every byte consumed and not yet rewound, newest last. The
//!   newest entry is the byte the scanner currently sees.
//! - **pending**: bytes that were consumed, then rewound. They form a stack
//!   whose top is the next byte to replay, and they are always replayed
//!   before anything new is read from the source.
//! - the **source** itself, holding everything not yet read.
//!
//! At every point, `history ++ pending (replay order) ++ unread source`
//! is exactly the original input, with no byte duplicated or dropped.
//!
//! End of input is stored as `None` and is replayed like any other entry.
//!
//! # Retention
//!
//! [`HistoryLimit::Bounded`] keeps only the newest `n` history entries in a
//! ring buffer. No observable behaviour changes as long as callers never
//! rewind by `n` or more, which the scanner guarantees by sizing the limit
//! to its longest fixed token.

use std::collections::VecDeque;
use std::io;

use smallvec::SmallVec;
use tracing::trace;

use crate::CharSource;

/// Inline capacity of the pending stack. Covers the deepest rewind the
/// scanner performs without spilling to the heap.
const PENDING_INLINE: usize = 8;

/// How much consumed input the cursor keeps around for rewinding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryLimit {
    /// Keep every consumed byte.
    #[default]
    Unbounded,
    /// Keep only the newest `n` bytes (minimum 1: the current byte).
    Bounded(usize),
}

impl HistoryLimit {
    /// Maximum number of retained entries, or `None` if unbounded.
    pub fn capacity(self) -> Option<usize> {
        match self {
            HistoryLimit::Unbounded => None,
            HistoryLimit::Bounded(n) => Some(n.max(1)),
        }
    }
}

/// Cursor that can push consumed bytes back and replay them in order.
///
/// Created with [`init`](Self::init), which consumes the first byte.
/// There is no way to use a cursor that has not been primed.
#[derive(Debug)]
pub struct RewindCursor<S> {
    source: S,
    /// Consumed bytes, oldest first. Never empty after `init`.
    history: VecDeque<Option<u8>>,
    /// Rewound bytes. The last element is the next one to replay.
    pending: SmallVec<[Option<u8>; PENDING_INLINE]>,
    limit: HistoryLimit,
    /// Offset of the current byte in the input.
    position: u32,
}

impl<S: CharSource> RewindCursor<S> {
    /// Prime a cursor with the first byte of `source`, keeping full history.
    pub fn init(source: S) -> io::Result<Self> {
        Self::init_with_limit(source, HistoryLimit::Unbounded)
    }

    /// Prime a cursor with the first byte of `source`.
    pub fn init_with_limit(mut source: S, limit: HistoryLimit) -> io::Result<Self> {
        let first = source.next_char()?;
        let mut cursor = Self {
            source,
            history: VecDeque::with_capacity(limit.capacity().unwrap_or(16)),
            pending: SmallVec::new(),
            limit,
            position: 0,
        };
        cursor.record(first);
        Ok(cursor)
    }

    /// Move to the next byte.
    ///
    /// Replays the top of the pending stack if there is one, otherwise
    /// reads from the source. Once the source is exhausted this keeps
    /// producing the end-of-input sentinel.
    pub fn advance(&mut self) -> io::Result<()> {
        let next = match self.pending.pop() {
            Some(replayed) => replayed,
            None => self.source.next_char()?,
        };
        self.record(next);
        self.position = self.position.saturating_add(1);
        Ok(())
    }

    fn record(&mut self, byte: Option<u8>) {
        if let Some(cap) = self.limit.capacity() {
            while self.history.len() >= cap {
                self.history.pop_front();
            }
        }
        self.history.push_back(byte);
    }
}

impl<S> RewindCursor<S> {
    /// The byte the cursor is on, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.history.back().copied().flatten()
    }

    /// Returns `true` if the cursor is on the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current().is_none()
    }

    /// Offset of the current byte in the input.
    ///
    /// Offsets are `u32`, so inputs are limited to 4 GiB. Past that the
    /// position sticks at `u32::MAX` instead of wrapping.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Un-consume the newest `steps` bytes.
    ///
    /// The next `steps` calls to [`advance`](Self::advance) replay exactly
    /// those bytes in their original order. Afterwards the cursor is back on
    /// the byte it was on `steps` advances ago.
    ///
    /// # Panics
    ///
    /// If fewer than `steps + 1` history entries are retained. Rewinding
    /// past what a caller itself consumed is a bug in the caller.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "steps < history.len() <= position + 1, which fits in u32"
    )]
    pub fn rewind_by(&mut self, steps: usize) {
        assert!(
            steps < self.history.len(),
            "cannot rewind by {steps}: only {} bytes of history retained",
            self.history.len()
        );
        for _ in 0..steps {
            if let Some(byte) = self.history.pop_back() {
                self.pending.push(byte);
            }
        }
        self.position -= steps as u32;
        trace!(
            steps,
            position = self.position,
            pending = self.pending.len(),
            "rewind"
        );
    }

    /// Returns `true` if rewound bytes are waiting to be replayed.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Retained history, oldest first. The last entry is the current byte.
    pub fn history(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.history.iter().copied()
    }

    /// Rewound bytes in the order they will be replayed.
    pub fn pending(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.pending.iter().rev().copied()
    }

    /// The current byte followed by every pending byte, oldest first.
    ///
    /// This is the run of input the cursor has seen but nobody has turned
    /// into a token yet. The end-of-input sentinel is left out.
    pub fn lookahead_run(&self) -> Vec<u8> {
        std::iter::once(self.current())
            .chain(self.pending())
            .flatten()
            .collect()
    }

    /// Retention policy the cursor was created with.
    pub fn limit(&self) -> HistoryLimit {
        self.limit
    }

    /// Give up the cursor and return the source, positioned after the
    /// newest byte ever read from it.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests;

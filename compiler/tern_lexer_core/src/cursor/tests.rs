#![allow(clippy::unwrap_used, reason = "tests panic on I/O failure")]

use std::io;

use pretty_assertions::assert_eq;

use super::*;
use crate::ReadSource;

fn cursor(source: &str) -> RewindCursor<ReadSource<&[u8]>> {
    RewindCursor::init(ReadSource::new(source.as_bytes())).unwrap()
}

fn bounded(source: &str, n: usize) -> RewindCursor<ReadSource<&[u8]>> {
    RewindCursor::init_with_limit(ReadSource::new(source.as_bytes()), HistoryLimit::Bounded(n))
        .unwrap()
}

/// Everything the cursor has not lost: retained history, then pending in
/// replay order, then whatever the source still holds.
fn reassemble(cursor: RewindCursor<ReadSource<&[u8]>>) -> Vec<u8> {
    let mut bytes: Vec<u8> = cursor.history().flatten().collect();
    bytes.extend(cursor.pending().flatten());
    bytes.extend_from_slice(cursor.into_source().into_inner());
    bytes
}

/// Source that yields `ok` bytes of `x`, then fails.
#[derive(Debug)]
struct FailAfter {
    ok: usize,
}

impl CharSource for FailAfter {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        if self.ok == 0 {
            return Err(io::Error::other("device gone"));
        }
        self.ok -= 1;
        Ok(Some(b'x'))
    }
}

// === Init ===

#[test]
fn init_primes_first_byte() {
    let c = cursor("abc");
    assert_eq!(c.current(), Some(b'a'));
    assert_eq!(c.position(), 0);
    assert_eq!(c.history().collect::<Vec<_>>(), vec![Some(b'a')]);
    assert!(!c.has_pending());
}

#[test]
fn init_on_empty_source_is_eof() {
    let c = cursor("");
    assert!(c.is_eof());
    assert_eq!(c.current(), None);
    assert_eq!(c.history().collect::<Vec<_>>(), vec![None]);
}

#[test]
fn init_propagates_io_error() {
    let err = RewindCursor::init(FailAfter { ok: 0 }).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}

// === Advance ===

#[test]
fn advance_walks_the_input() {
    let mut c = cursor("ab");
    c.advance().unwrap();
    assert_eq!(c.current(), Some(b'b'));
    assert_eq!(c.position(), 1);
    c.advance().unwrap();
    assert!(c.is_eof());
    assert_eq!(c.position(), 2);
}

#[test]
fn advance_past_end_stays_at_eof() {
    let mut c = cursor("a");
    c.advance().unwrap();
    c.advance().unwrap();
    c.advance().unwrap();
    assert!(c.is_eof());
    assert_eq!(
        c.history().collect::<Vec<_>>(),
        vec![Some(b'a'), None, None, None]
    );
}

#[test]
fn advance_propagates_io_error() {
    let mut c = RewindCursor::init(FailAfter { ok: 2 }).unwrap();
    c.advance().unwrap();
    let err = c.advance().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    // A failed read does not move the cursor.
    assert_eq!(c.current(), Some(b'x'));
    assert_eq!(c.position(), 1);
}

#[test]
fn position_saturates_at_u32_max() {
    let mut c = cursor("ab");
    c.position = u32::MAX - 1;
    c.advance().unwrap();
    assert_eq!(c.position(), u32::MAX);
    c.advance().unwrap();
    assert_eq!(c.position(), u32::MAX);
    assert!(c.is_eof());
}

// === Rewind ===

#[test]
fn rewind_returns_to_earlier_byte() {
    let mut c = cursor("write");
    c.advance().unwrap();
    c.advance().unwrap();
    c.advance().unwrap();
    assert_eq!(c.current(), Some(b't'));
    c.rewind_by(3);
    assert_eq!(c.current(), Some(b'w'));
    assert_eq!(c.position(), 0);
    assert_eq!(
        c.pending().collect::<Vec<_>>(),
        vec![Some(b'r'), Some(b'i'), Some(b't')]
    );
}

#[test]
fn rewind_then_advance_replays_in_order() {
    let mut c = cursor("wrx");
    c.advance().unwrap();
    c.advance().unwrap();
    c.rewind_by(2);

    let mut replayed = Vec::new();
    for _ in 0..2 {
        c.advance().unwrap();
        replayed.push(c.current());
    }
    assert_eq!(replayed, vec![Some(b'r'), Some(b'x')]);
    assert!(!c.has_pending());
    assert_eq!(c.position(), 2);
}

#[test]
fn replay_comes_before_fresh_input() {
    let mut c = cursor("abcd");
    c.advance().unwrap();
    c.rewind_by(1);
    c.advance().unwrap();
    c.advance().unwrap();
    assert_eq!(c.current(), Some(b'c'));
    assert_eq!(c.history().flatten().collect::<Vec<_>>(), b"abc".to_vec());
}

#[test]
fn rewind_by_zero_is_a_no_op() {
    let mut c = cursor("ab");
    c.advance().unwrap();
    c.rewind_by(0);
    assert_eq!(c.current(), Some(b'b'));
    assert!(!c.has_pending());
    assert_eq!(c.position(), 1);
}

#[test]
fn eof_sentinel_is_replayed() {
    let mut c = cursor("-");
    c.advance().unwrap();
    assert!(c.is_eof());
    c.rewind_by(1);
    assert_eq!(c.current(), Some(b'-'));
    assert_eq!(c.pending().collect::<Vec<_>>(), vec![None]);
    c.advance().unwrap();
    assert!(c.is_eof());
    assert!(!c.has_pending());
}

#[test]
fn nested_rewinds_stack_correctly() {
    let mut c = cursor("abcde");
    for _ in 0..4 {
        c.advance().unwrap();
    }
    c.rewind_by(2); // pending: d e
    c.rewind_by(1); // pending: c d e
    assert_eq!(c.current(), Some(b'b'));
    assert_eq!(
        c.pending().collect::<Vec<_>>(),
        vec![Some(b'c'), Some(b'd'), Some(b'e')]
    );
    c.advance().unwrap();
    assert_eq!(c.current(), Some(b'c'));
}

#[test]
#[should_panic(expected = "cannot rewind")]
fn rewind_past_history_panics() {
    let mut c = cursor("ab");
    c.advance().unwrap();
    c.rewind_by(2);
}

// === Lookahead run ===

#[test]
fn lookahead_run_without_pending_is_current() {
    let c = cursor("@x");
    assert_eq!(c.lookahead_run(), b"@".to_vec());
}

#[test]
fn lookahead_run_includes_pending_oldest_first() {
    let mut c = cursor("-x");
    c.advance().unwrap();
    c.rewind_by(1);
    assert_eq!(c.lookahead_run(), b"-x".to_vec());
}

#[test]
fn lookahead_run_skips_eof() {
    let c = cursor("");
    assert!(c.lookahead_run().is_empty());
}

// === Bounded history ===

#[test]
fn bounded_history_drops_oldest() {
    let mut c = bounded("abcdef", 3);
    for _ in 0..5 {
        c.advance().unwrap();
    }
    assert_eq!(c.limit(), HistoryLimit::Bounded(3));
    assert_eq!(
        c.history().collect::<Vec<_>>(),
        vec![Some(b'd'), Some(b'e'), Some(b'f')]
    );
}

#[test]
fn bounded_history_supports_rewind_below_capacity() {
    let mut c = bounded("abcdef", 3);
    for _ in 0..4 {
        c.advance().unwrap();
    }
    c.rewind_by(2);
    assert_eq!(c.current(), Some(b'c'));
    assert_eq!(c.position(), 2);
    c.advance().unwrap();
    c.advance().unwrap();
    assert_eq!(c.current(), Some(b'e'));
}

#[test]
#[should_panic(expected = "cannot rewind")]
fn bounded_history_rejects_rewind_at_capacity() {
    let mut c = bounded("abcdef", 3);
    for _ in 0..4 {
        c.advance().unwrap();
    }
    c.rewind_by(3);
}

#[test]
fn bounded_zero_keeps_current() {
    let mut c = bounded("ab", 0);
    c.advance().unwrap();
    assert_eq!(c.current(), Some(b'b'));
    assert_eq!(HistoryLimit::Bounded(0).capacity(), Some(1));
}

// === Complement invariant ===

#[test]
fn input_reassembles_mid_speculation() {
    let mut c = cursor("write k");
    for _ in 0..3 {
        c.advance().unwrap();
    }
    c.rewind_by(2);
    assert_eq!(reassemble(c), b"write k".to_vec());
}

mod proptest_replay {
    use super::{cursor, reassemble};
    use proptest::prelude::*;

    fn ascii() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[ -~\n\t]{0,40}").unwrap()
    }

    proptest! {
        #[test]
        fn replay_is_idempotent(input in ascii(), k in 0usize..48) {
            let mut c = cursor(&input);
            let mut first = Vec::new();
            for _ in 0..k {
                c.advance().unwrap();
                first.push(c.current());
            }
            c.rewind_by(k);
            let mut second = Vec::new();
            for _ in 0..k {
                c.advance().unwrap();
                second.push(c.current());
            }
            prop_assert_eq!(first, second);
        }

        #[test]
        fn history_pending_and_source_cover_input(
            input in ascii(),
            moves in proptest::collection::vec((0usize..6, 0usize..6), 0..12),
        ) {
            let mut c = cursor(&input);
            for (forward, back) in moves {
                for _ in 0..forward {
                    c.advance().unwrap();
                }
                let back = back.min(c.history().count() - 1);
                c.rewind_by(back);
            }
            prop_assert_eq!(reassemble(c), input.into_bytes());
        }

        #[test]
        fn position_tracks_history_length(input in "[a-z]{1,20}", k in 0usize..20) {
            let mut c = cursor(&input);
            for _ in 0..k {
                c.advance().unwrap();
            }
            let expected = u32::try_from(k).unwrap();
            prop_assert_eq!(c.position(), expected);
        }
    }
}

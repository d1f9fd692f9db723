//! Low-level input handling for the Tern scanner.
//!
//! Two pieces live here:
//! - [`CharSource`]: a forward-only, read-once stream of bytes.
//! - [`RewindCursor`]: wraps a source and adds replay of already-consumed
//!   bytes, which is what the scanner's speculative keyword matching needs.
//!
//! The crate knows nothing about tokens. The scanner in `tern_lexer` drives
//! the cursor; other tools that need replayable input can use it directly.

mod cursor;
mod source;

pub use cursor::{HistoryLimit, RewindCursor};
pub use source::{CharSource, ReadSource};

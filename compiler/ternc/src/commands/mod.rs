//! Command handlers for the Tern CLI.

mod lex;

pub use lex::{lex_command, parse_lex_options, write_tokens, Input, LexFailure, LexOptions, OptionsError};

//! The `lex` command: tokenize a file or stdin and print the token stream.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use tern_lexer::{Dialect, LexError, Scanner};
use thiserror::Error;
use tracing::debug;

/// Where `lex` reads from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Options for `tern lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub input: Input,
    pub dialect: Dialect,
    /// Print each token's byte range after it.
    pub show_spans: bool,
}

/// Bad command-line arguments for `tern lex`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown dialect '{0}' (expected 'propositional' or 'imperative')")]
    UnknownDialect(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}': only one input may be given")]
    ExtraInput(String),
}

/// Parse the arguments that follow `tern lex`.
///
/// Accepts at most one input (a path, or `-` for stdin) plus
/// `--dialect=<name>` and `--spans` in any order.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, OptionsError> {
    let mut options = LexOptions::default();
    let mut input_seen = false;

    for arg in args {
        if let Some(name) = arg.strip_prefix("--dialect=") {
            options.dialect =
                Dialect::from_name(name).ok_or_else(|| OptionsError::UnknownDialect(name.to_string()))?;
        } else if arg == "--spans" {
            options.show_spans = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(OptionsError::UnknownOption(arg.clone()));
        } else if input_seen {
            return Err(OptionsError::ExtraInput(arg.clone()));
        } else {
            input_seen = true;
            if arg != "-" {
                options.input = Input::File(PathBuf::from(arg));
            }
        }
    }

    Ok(options)
}

/// Why `lex` stopped early.
#[derive(Debug, Error)]
pub enum LexFailure {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to write output: {0}")]
    Output(io::Error),
}

/// Scan `reader` and print one token per line to `out`.
///
/// Tokens emitted before an error are written (and flushed) before the
/// error is returned. Returns the number of tokens written, `EOF` included.
pub fn write_tokens<R: Read, W: Write>(
    reader: R,
    options: &LexOptions,
    out: &mut W,
) -> Result<usize, LexFailure> {
    let scanner = Scanner::from_reader(reader, options.dialect)?;
    let mut count = 0;
    let mut outcome = Ok(());

    for result in scanner {
        match result {
            Ok(token) => {
                let written = if options.show_spans {
                    writeln!(out, "{token} @ {}", token.span)
                } else {
                    writeln!(out, "{token}")
                };
                written.map_err(LexFailure::Output)?;
                count += 1;
            }
            Err(e) => outcome = Err(LexFailure::Lex(e)),
        }
    }

    out.flush().map_err(LexFailure::Output)?;
    outcome.map(|()| count)
}

/// Run `tern lex` and exit with status 1 on any failure.
pub fn lex_command(options: &LexOptions) {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match &options.input {
        Input::Stdin => {
            debug!(dialect = %options.dialect, "lexing stdin");
            write_tokens(io::stdin().lock(), options, &mut out)
        }
        Input::File(path) => {
            debug!(dialect = %options.dialect, path = %path.display(), "lexing file");
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    let path = path.display();
                    let msg = match e.kind() {
                        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                        io::ErrorKind::PermissionDenied => {
                            format!("permission denied reading '{path}'")
                        }
                        _ => format!("error reading '{path}': {e}"),
                    };
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            write_tokens(BufReader::new(file), options, &mut out)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

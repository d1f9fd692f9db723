//! Tern CLI
//!
//! Scanner front end for the Tern three-valued logic language.

use ternc::commands::{lex_command, parse_lex_options};

fn main() {
    ternc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_options(&args[2..]) {
            Ok(options) => lex_command(&options),
            Err(e) => {
                eprintln!("error: {e}");
                eprintln!();
                eprintln!("Usage: tern lex [<file> | -] [--dialect=<name>] [--spans]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Tern {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tern (three-valued logic scanner)");
    println!();
    println!("Usage: tern <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [<file> | -]     Tokenize a file (or stdin) and print the tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --dialect=<name>     Language variant: imperative (default), propositional");
    println!("  --spans              Print the byte range of each token");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable scanner tracing (e.g. RUST_LOG=tern_lexer=trace)");
    println!();
    println!("Examples:");
    println!("  tern lex program.tern");
    println!("  echo 'k = 1; write k' | tern lex");
    println!("  tern lex --dialect=propositional --spans expr.tern");
}

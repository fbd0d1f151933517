//! Estra lexical analyzer CLI.
//!
//! Reads a source file, classifies it against the built-in dialect, and
//! prints the token table plus an error summary. Exit code 0 when every
//! token is recognized, 1 on lexical errors or I/O failures, 2 on usage
//! errors.

mod report;

use estra_automaton::{Automaton, Dialect};
use estra_lexer::{lexical_errors, tokenize};
use tracing::debug;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("estrac {}", env!("CARGO_PKG_VERSION"));
        }
        path => {
            std::process::exit(analyze(path));
        }
    }
}

fn analyze(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            return 1;
        }
    };

    // The built-in dialect is validated at startup; a failure here is a
    // packaging bug, not bad user input.
    let automaton = match Automaton::build(&Dialect::estra()) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprintln!("error: dialect configuration: {err}");
            return 1;
        }
    };
    debug!(states = automaton.state_count(), "automaton built");

    let tokens = tokenize(&automaton, &source);
    debug!(tokens = tokens.len(), "classification finished");

    print!("{}", report::render_table(&tokens));

    let errors = lexical_errors(&tokens);
    if errors.is_empty() {
        println!();
        println!("{} tokens, no lexical errors", tokens.len());
        0
    } else {
        eprintln!();
        eprint!("{}", report::render_errors(&errors));
        eprintln!("{} tokens, {} lexical errors", tokens.len(), errors.len());
        1
    }
}

fn print_usage() {
    println!("Estra lexical analyzer");
    println!();
    println!("Usage: estrac <file.estra>");
    println!();
    println!("Commands:");
    println!("  <file.estra>    Tokenize a source file and print the token table");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Set RUST_LOG=debug for diagnostics on stderr.");
}

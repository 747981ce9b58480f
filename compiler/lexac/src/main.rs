//! lexa CLI
//!
//! Drives the scanner over a file and dumps the token stream.

mod commands;
mod tracing_setup;

use commands::{lex_file, parse_lex_options};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lexac lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --strict          Reject malformed UTF-8 instead of stopping at it");
                eprintln!("  --max-len=<bytes> Refuse inputs longer than this");
                eprintln!("  --positions       Print line:column for each token");
                std::process::exit(1);
            }

            let options = match parse_lex_options(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };

            if !lex_file(&args[2], &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("lexac {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lexa scanner");
    println!();
    println!("Usage: lexac <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Scan a file and print its tokens");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Set LEXA_LOG (or RUST_LOG) to enable tracing, e.g. LEXA_LOG=lexa_scanner=trace");
}

//! sift CLI
//!
//! Drives the matcher-trie lexer over files with the bundled demo grammar.

use siftc::commands::{explain_error, lex_file};
use siftc::config::{parse_lex_options, LexOptions};

fn main() {
    siftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sift lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --format=<fmt>      Output format: text (default), json");
                eprintln!("  --color=<mode>      Colors: auto (default), always, never");
                eprintln!("  --keep-going, -k    Report every error instead of stopping");
                std::process::exit(1);
            }
            let options = parse_lex_options(&args[2..], LexOptions::from_env());
            lex_file(&options);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: sift explain <ERROR_CODE>");
                eprintln!("Example: sift explain E0001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("sift {}", env!("CARGO_PKG_VERSION"));
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
    println!("sift: a matcher-trie lexer");
    println!();
    println!("Usage: sift <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E0001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --format=<fmt>      Output format: text (default), json");
    println!("  --color=<mode>      Colors: auto (default), always, never");
    println!("  --keep-going, -k    Report every error instead of stopping");
    println!();
    println!("Environment:");
    println!("  SIFT_COLOR          Default color mode (overridden by --color)");
    println!("  RUST_LOG            Enable logging, e.g. RUST_LOG=sift_lexer=trace");
    println!("  SIFT_LOG_TREE=1     Render logged spans as a tree");
    println!();
    println!("Examples:");
    println!("  sift lex main.sift");
    println!("  sift lex main.sift --format=json");
    println!("  sift lex main.sift -k --color=never");
    println!("  sift explain E0002");
}

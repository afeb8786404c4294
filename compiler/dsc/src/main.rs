//! `datashape` command line tool.
//!
//! Parses type expressions and prints what the type core makes of them.

use std::io::IsTerminal;

use dsc::{commands, init_tracing, render_syntax_error, CommandError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: datashape show <expr>");
                eprintln!("Example: datashape show \"3 * var * {{ x : int32, y : float64 }}\"");
                std::process::exit(1);
            }
            commands::show(&args[2])
        }
        "sigform" => {
            if args.len() < 3 {
                eprintln!("Usage: datashape sigform <expr>");
                eprintln!("Example: datashape sigform \"10 * var * float32\"");
                std::process::exit(1);
            }
            commands::sigform(&args[2])
        }
        "subshape" => {
            if args.len() < 4 {
                eprintln!("Usage: datashape subshape <expr> <index>");
                eprintln!();
                eprintln!("Index syntax:");
                eprintln!("  3              Integer position");
                eprintln!("  1:9:2          Slice (start, stop and step are optional)");
                eprintln!("  'name'         Record field");
                eprintln!("  [0, 2]         List of positions or fields");
                eprintln!("  0, :           One entry per dimension");
                eprintln!();
                eprintln!("Example: datashape subshape \"10 * {{ x : int32 }}\" \"0:3, 'x'\"");
                std::process::exit(1);
            }
            commands::subshape(&args[2], &args[3])
        }
        "layout" => {
            if args.len() < 3 {
                eprintln!("Usage: datashape layout <expr>");
                eprintln!("Example: datashape layout \"5 * 3 * float32\"");
                std::process::exit(1);
            }
            commands::layout(&args[2])
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: datashape lex <expr>");
                std::process::exit(1);
            }
            Ok(commands::lex(&args[2]))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-v" => {
            println!("datashape {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(CommandError::Syntax { text, error }) => {
            let color = std::io::stderr().is_terminal();
            eprint!("{}", render_syntax_error(&text, &error, color));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("datashape: structural array types");
    println!();
    println!("Usage: datashape <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  show <expr>              Canonical form, shape, measure and free variables");
    println!("  sigform <expr>           Replace dimensions with type variables");
    println!("  subshape <expr> <index>  Type of an indexed part of an array");
    println!("  layout <expr>            Native array layout (shape and element type)");
    println!("  lex <expr>               Tokenize and display tokens");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=ds_parse=trace) to trace parsing and indexing.");
}

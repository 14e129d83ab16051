//! Universal Machine CLI — run, assemble, and disassemble UM programs.
//!
//! Exit codes:
//! - 0: Success (HALT or clean off-the-end termination)
//! - 1: Invocation error (bad arguments, unreadable file, malformed image)
//! - 2: Runtime fault

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "assemble" => commands::assemble(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        // `um <program.um>` is the plain invocation.
        _ => commands::run(&args[1..]),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: um <program.um>");
    eprintln!("       um <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program.um>                      Execute a program image");
    eprintln!("  assemble <input.ums> [-o output.um]   Assemble text to binary");
    eprintln!("  disassemble <program.um>              Disassemble binary to text");
}

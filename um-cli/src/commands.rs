//! CLI command implementations.

use std::fs;
use std::io;

use um_common::Program;

/// Execute a .um program image against stdin/stdout.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.len() != 1 {
        eprintln!("error: run requires exactly one program file");
        eprintln!("Usage: um run <program.um>");
        return Err(1);
    }

    let input = &args[0];
    let program = read_image(input)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    match um_vm::run(&program, stdin.lock(), stdout.lock()) {
        Ok(()) => Ok(()),
        Err(fault) => {
            eprintln!("fault: {fault}");
            Err(2)
        }
    }
}

/// Assemble a .ums text file to a .um binary image.
pub fn assemble(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: assemble requires an input file");
        eprintln!("Usage: um assemble <input.ums> [-o output.um]");
        return Err(1);
    }

    let input = &args[0];

    // Parse -o flag
    let output = if args.len() >= 3 && args[1] == "-o" {
        args[2].clone()
    } else if let Some(stem) = input.strip_suffix(".ums") {
        format!("{stem}.um")
    } else {
        format!("{input}.um")
    };

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let program = um_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let bytes = program.encode();
    let word_count = program.len();

    fs::write(&output, &bytes).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        1
    })?;

    eprintln!(
        "assembled {word_count} words ({} bytes) -> {output}",
        bytes.len()
    );
    Ok(())
}

/// Disassemble a .um binary image to text on stdout.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    if args.len() != 1 {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: um disassemble <program.um>");
        return Err(1);
    }

    let program = read_image(&args[0])?;
    print!("{}", um_assembler::disassemble(&program));
    Ok(())
}

/// Read and decode a .um program image.
fn read_image(path: &str) -> Result<Program, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    Program::decode(&bytes).map_err(|e| {
        eprintln!("error: '{path}': {e}");
        1
    })
}

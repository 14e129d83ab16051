//! Universal Machine assembler — bidirectional text ↔ binary translation.
//!
//! The assembler is a mechanical 1:1 translation: one line, one word.
//! No labels, no macros.
//!
//! # Usage
//!
//! ```
//! use um_assembler::{assemble, disassemble};
//!
//! let text = "LV r0 0x0000041\nOUT r0\nHALT\n";
//! let program = assemble(text).unwrap();
//! let roundtripped = disassemble(&program);
//! assert_eq!(roundtripped, text);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for every program: a
//! word disassembles to a mnemonic only when reassembling that mnemonic
//! reproduces it bit for bit (canonical encoding, and zero in every
//! register field the mnemonic does not name); all other words become
//! `WORD` directives. The disassembler outputs canonical text; the
//! assembler also accepts non-canonical input (decimal where hex is
//! canonical, lowercase mnemonics).

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use error::AsmError;

use lexer::tokenize_line;
use parser::parse_line;
use um_common::Program;

/// Assemble text into a binary program.
///
/// Returns the first error encountered. Fix one error at a time.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut words = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line, line_num)?;
        if let Some(word) = parse_line(&tokens, line_num)? {
            words.push(word);
        }
    }

    Ok(Program::new(words))
}

/// Disassemble a binary program into canonical assembly text.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}

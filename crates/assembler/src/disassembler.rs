//! Disassembler: binary program → canonical assembly text.
//!
//! Output is flat text, one word per line. A word is printed as a
//! mnemonic only if reassembling that mnemonic reproduces the word
//! exactly: the encoding must be canonical (unused bits zero) and every
//! register field the mnemonic does not name must be zero, since the
//! parser zeroes the fields it cannot carry. Every other word becomes a
//! `WORD` directive, which keeps the reassembly roundtrip exact even for
//! data words.

use um_common::{Instruction, Opcode, Program};

/// Disassemble a program into canonical assembly text.
///
/// The output is guaranteed to reassemble to an identical word sequence
/// (`assemble(disassemble(program)) == program`).
pub fn disassemble(program: &Program) -> String {
    let mut lines = Vec::with_capacity(program.len());

    for &word in &program.words {
        lines.push(disassemble_word(word));
    }

    let mut result = lines.join("\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}

fn disassemble_word(word: u32) -> String {
    if let Ok(instr) = Instruction::decode(word) {
        if instr.encode() == word {
            if let Some(line) = mnemonic_form(instr) {
                return line;
            }
        }
    }
    // Not expressible as a mnemonic: emit raw data.
    format!("WORD 0x{word:08x}")
}

/// The mnemonic rendering of an instruction, or `None` when the assembly
/// form cannot carry one of its register fields.
fn mnemonic_form(instr: Instruction) -> Option<String> {
    match instr {
        Instruction::LoadValue { a, value } => Some(format!("LV r{a} 0x{value:07x}")),
        Instruction::Standard { opcode, a, b, c } => match opcode {
            Opcode::Cmov
            | Opcode::Sload
            | Opcode::Sstore
            | Opcode::Add
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Nand => Some(format!("{} r{a} r{b} r{c}", opcode.mnemonic())),

            Opcode::Halt if a == 0 && b == 0 && c == 0 => Some(opcode.mnemonic().to_string()),

            Opcode::Map | Opcode::LoadProgram if a == 0 => {
                Some(format!("{} r{b} r{c}", opcode.mnemonic()))
            }

            Opcode::Unmap | Opcode::Out | Opcode::In if a == 0 && b == 0 => {
                Some(format!("{} r{c}", opcode.mnemonic()))
            }

            Opcode::LoadValue => unreachable!("decodes to Instruction::LoadValue"),

            // A register field the mnemonic does not name is set.
            _ => None,
        },
    }
}

//! Instruction word encoding and decoding.
//!
//! Every instruction is one 32-bit word, in one of two formats:
//! ```text
//! Standard (opcodes 0-12):   bits 31-28 opcode | 27-9 unused | 8-6 A | 5-3 B | 2-0 C
//! Load-value (opcode 13):    bits 31-28 opcode | 27-25 A | 24-0 immediate
//! ```
//! Unused bits are ignored on decode and zero on encode, so decoding is
//! total over the valid opcodes but `encode` is canonical: the roundtrip
//! `decode(i.encode()) == i` holds for every instruction.

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// Number of general-purpose registers. Register fields are 3 bits wide.
pub const NUM_REGISTERS: u32 = 8;

/// Maximum value of the 25-bit load-value immediate.
pub const MAX_IMMEDIATE: u32 = (1 << 25) - 1;

/// A single decoded instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Three-register format, opcodes 0-12.
    Standard { opcode: Opcode, a: u32, b: u32, c: u32 },
    /// Load-value format, opcode 13.
    LoadValue { a: u32, value: u32 },
}

impl Instruction {
    /// Build a standard-format instruction.
    ///
    /// `opcode` must not be [`Opcode::LoadValue`]; register fields must be
    /// below [`NUM_REGISTERS`].
    pub fn standard(opcode: Opcode, a: u32, b: u32, c: u32) -> Self {
        debug_assert!(opcode != Opcode::LoadValue);
        debug_assert!(a < NUM_REGISTERS && b < NUM_REGISTERS && c < NUM_REGISTERS);
        Instruction::Standard { opcode, a, b, c }
    }

    /// Build a load-value instruction. `value` must fit in 25 bits.
    pub fn load_value(a: u32, value: u32) -> Self {
        debug_assert!(a < NUM_REGISTERS);
        debug_assert!(value <= MAX_IMMEDIATE);
        Instruction::LoadValue { a, value }
    }

    /// Decode a word. Pure shift-and-mask; fails only on an opcode
    /// field above 13.
    pub fn decode(word: u32) -> Result<Self, DecodeError> {
        let opcode = Opcode::try_from((word >> 28) as u8)?;
        match opcode {
            Opcode::LoadValue => Ok(Instruction::LoadValue {
                a: (word >> 25) & 0x7,
                value: word & MAX_IMMEDIATE,
            }),
            _ => Ok(Instruction::Standard {
                opcode,
                a: (word >> 6) & 0x7,
                b: (word >> 3) & 0x7,
                c: word & 0x7,
            }),
        }
    }

    /// Encode to the canonical word (unused bits zero, fields masked to
    /// their widths).
    pub fn encode(&self) -> u32 {
        match *self {
            Instruction::Standard { opcode, a, b, c } => {
                ((opcode as u32) << 28) | ((a & 0x7) << 6) | ((b & 0x7) << 3) | (c & 0x7)
            }
            Instruction::LoadValue { a, value } => {
                ((Opcode::LoadValue as u32) << 28) | ((a & 0x7) << 25) | (value & MAX_IMMEDIATE)
            }
        }
    }

    /// The opcode of this instruction.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Standard { opcode, .. } => *opcode,
            Instruction::LoadValue { .. } => Opcode::LoadValue,
        }
    }
}

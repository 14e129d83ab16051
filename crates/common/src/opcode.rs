//! Opcode definitions for the Universal Machine instruction set.

use crate::error::DecodeError;

/// Identifies the operation a word performs.
///
/// The discriminant of each variant is the 4-bit opcode field stored in
/// bits 31-28 of an instruction word.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// If r\[C\] is non-zero, move r\[B\] into r\[A\].
    Cmov = 0,
    /// r\[A\] gets the word at offset r\[C\] of segment r\[B\].
    Sload = 1,
    /// The word at offset r\[B\] of segment r\[A\] gets r\[C\].
    Sstore = 2,
    /// r\[A\] gets r\[B\] + r\[C\], modulo 2^32.
    Add = 3,
    /// r\[A\] gets r\[B\] * r\[C\], modulo 2^32.
    Mul = 4,
    /// r\[A\] gets r\[B\] / r\[C\], truncated. Division by zero is a fault.
    Div = 5,
    /// r\[A\] gets the bitwise complement of r\[B\] AND r\[C\].
    Nand = 6,
    /// Stop the machine.
    Halt = 7,
    /// Map a zero-filled segment of r\[C\] words; r\[B\] gets its id.
    Map = 8,
    /// Unmap segment r\[C\]. Segment 0 and unmapped ids are faults.
    Unmap = 9,
    /// Emit the byte r\[C\] to host output. Values above 255 are a fault.
    Out = 10,
    /// Read one byte from host input into r\[C\]; all-ones on EOF.
    In = 11,
    /// Replace segment 0 with a copy of segment r\[B\] (unless r\[B\] is 0),
    /// then jump to offset r\[C\].
    LoadProgram = 12,
    /// r\[A\] gets a 25-bit immediate, zero-extended.
    LoadValue = 13,
}

/// All valid opcodes, in numeric order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 14] = [
    Opcode::Cmov,
    Opcode::Sload,
    Opcode::Sstore,
    Opcode::Add,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Nand,
    Opcode::Halt,
    Opcode::Map,
    Opcode::Unmap,
    Opcode::Out,
    Opcode::In,
    Opcode::LoadProgram,
    Opcode::LoadValue,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Opcode::Cmov),
            1 => Ok(Opcode::Sload),
            2 => Ok(Opcode::Sstore),
            3 => Ok(Opcode::Add),
            4 => Ok(Opcode::Mul),
            5 => Ok(Opcode::Div),
            6 => Ok(Opcode::Nand),
            7 => Ok(Opcode::Halt),
            8 => Ok(Opcode::Map),
            9 => Ok(Opcode::Unmap),
            10 => Ok(Opcode::Out),
            11 => Ok(Opcode::In),
            12 => Ok(Opcode::LoadProgram),
            13 => Ok(Opcode::LoadValue),
            _ => Err(DecodeError::InvalidOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Cmov => "CMOV",
            Opcode::Sload => "SLOAD",
            Opcode::Sstore => "SSTORE",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Nand => "NAND",
            Opcode::Halt => "HALT",
            Opcode::Map => "MAP",
            Opcode::Unmap => "UNMAP",
            Opcode::Out => "OUT",
            Opcode::In => "IN",
            Opcode::LoadProgram => "LOADP",
            Opcode::LoadValue => "LV",
        }
    }
}

//! The Universal Machine — a 32-bit register machine with segmented memory.
//!
//! The machine has:
//! - Eight general-purpose 32-bit registers
//! - A segmented memory in which segments are mapped and unmapped at
//!   runtime, with unmapped ids recycled through a free list
//! - A 14-opcode instruction set, including a load-program instruction
//!   that replaces the executing segment with a copy of another one
//!
//! # Usage
//!
//! ```
//! use um_common::{Instruction, Opcode, Program};
//! use um_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::load_value(0, 0x41).encode(),
//!     Instruction::standard(Opcode::Out, 0, 0, 0).encode(),
//!     Instruction::standard(Opcode::Halt, 0, 0, 0).encode(),
//! ]);
//!
//! let mut output = Vec::new();
//! run(&program, std::io::empty(), &mut output).unwrap();
//! assert_eq!(output, b"A");
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;
pub mod registers;

pub use error::{Fault, MemoryFault};
pub use machine::Um;
pub use memory::Memory;
pub use registers::Registers;

use std::io::{Read, Write};
use um_common::Program;

/// Load `program` into segment 0 and run it against the given host streams.
///
/// Returns `Ok(())` on HALT or when the program counter runs off the end
/// of segment 0.
///
/// # Errors
///
/// Returns [`Fault`] on any fatal condition: an illegal instruction word,
/// a bad memory access or unmap, division by zero, an OUT value above 255,
/// or a host I/O failure other than EOF.
pub fn run<R: Read, W: Write>(program: &Program, input: R, output: W) -> Result<(), Fault> {
    let mut um = Um::new(program, input, output);
    um.execute()
}

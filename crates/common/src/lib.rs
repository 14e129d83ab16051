//! Universal Machine common types and instruction encoding.
//!
//! This crate provides the foundational data structures shared by the
//! machine, the assembler, and the CLI:
//!
//! - [`Opcode`] — the 14 operations of the instruction set
//! - [`Instruction`] — the two 32-bit word formats with encode/decode
//! - [`Program`] — a word sequence with big-endian byte-stream encode/decode
//! - [`DecodeError`] — errors from decoding words and byte streams
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::{Instruction, MAX_IMMEDIATE, NUM_REGISTERS};
pub use opcode::Opcode;
pub use program::Program;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random standard-format opcode (0-12).
    fn arb_standard_opcode() -> impl Strategy<Value = Opcode> {
        prop::sample::select(&opcode::ALL_OPCODES[..13])
    }

    /// Strategy that generates a random valid instruction in either format.
    fn arb_instruction() -> impl Strategy<Value = Instruction> {
        let standard = (arb_standard_opcode(), 0u32..8, 0u32..8, 0u32..8)
            .prop_map(|(op, a, b, c)| Instruction::standard(op, a, b, c));
        let load_value =
            (0u32..8, 0u32..=MAX_IMMEDIATE).prop_map(|(a, v)| Instruction::load_value(a, v));
        prop_oneof![standard, load_value]
    }

    proptest! {
        /// For all valid instructions, encode then decode produces the original.
        #[test]
        fn encode_decode_roundtrip(instr in arb_instruction()) {
            let word = instr.encode();
            prop_assert_eq!(Instruction::decode(word), Ok(instr));
        }

        /// For any word, decode either fails on the opcode field or yields
        /// an instruction whose canonical encoding decodes back to itself.
        /// (The raw word may differ from the canonical encoding: standard
        /// format ignores bits 27-9.)
        #[test]
        fn random_word_decode(word in any::<u32>()) {
            match Instruction::decode(word) {
                Ok(instr) => {
                    prop_assert_eq!(Instruction::decode(instr.encode()), Ok(instr));
                }
                Err(e) => {
                    prop_assert_eq!(e, DecodeError::InvalidOpcode((word >> 28) as u8));
                    prop_assert!((word >> 28) >= 14);
                }
            }
        }

        /// Program encode/decode roundtrip over arbitrary word vectors.
        #[test]
        fn program_roundtrip(words in prop::collection::vec(any::<u32>(), 0..64)) {
            let program = Program::new(words);
            let bytes = program.encode();
            prop_assert_eq!(Program::decode(&bytes), Ok(program));
        }

        /// Decoding rejects exactly the byte streams whose length is not a
        /// multiple of 4.
        #[test]
        fn program_decode_length_check(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            match Program::decode(&bytes) {
                Ok(program) => prop_assert_eq!(program.len() * 4, bytes.len()),
                Err(e) => prop_assert_eq!(e, DecodeError::InvalidLength(bytes.len())),
            }
        }
    }
}

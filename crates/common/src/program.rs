//! Program image representation.
//!
//! A program is a flat sequence of 32-bit words. On disk (.um files) the
//! words are concatenated big-endian with no header: word N occupies bytes
//! 4N..4N+3, most significant byte first.

use crate::error::DecodeError;

/// A Universal Machine program: the initial contents of segment 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The instruction/data words.
    pub words: Vec<u32>,
}

impl Program {
    /// Create a new program from a vector of words.
    pub fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Encode the program to big-endian bytes.
    ///
    /// The result length is always `words.len() * 4`.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.words.len() * 4);
        for word in &self.words {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Decode a byte slice into a program.
    ///
    /// The byte slice length must be a multiple of 4. Each 4-byte chunk is
    /// one big-endian word. Words are not validated here: segment 0 may
    /// hold data as well as instructions, so decode faults are a runtime
    /// concern of the machine, not the loader.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() % 4 != 0 {
            return Err(DecodeError::InvalidLength(bytes.len()));
        }

        let words = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { words })
    }

    /// Number of words in the program.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

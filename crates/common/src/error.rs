//! Decode errors for Universal Machine instruction streams.

use thiserror::Error;

/// Errors from decoding words or program byte streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 4-bit opcode field holds a value above 13.
    #[error("invalid opcode: {0}")]
    InvalidOpcode(u8),

    /// Program byte stream length is not a multiple of 4.
    #[error("invalid program length: {0} bytes (must be a multiple of 4)")]
    InvalidLength(usize),
}

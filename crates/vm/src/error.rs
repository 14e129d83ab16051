//! Runtime faults for the Universal Machine.
//!
//! Every fault is fatal: the machine stops and the fault propagates to the
//! caller. [`Fault`] carries the program counter of the faulting
//! instruction (`at`) for diagnostics.

use thiserror::Error;
use um_common::DecodeError;

/// Faults raised by the segmented memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryFault {
    /// Load or store through a segment id that is not mapped.
    #[error("access to unmapped segment {segment}")]
    UnmappedSegment { segment: u32 },

    /// Load or store past the end of a mapped segment.
    #[error("offset {offset} out of bounds for segment {segment} (length {length})")]
    OffsetOutOfBounds {
        segment: u32,
        offset: u32,
        length: u32,
    },

    /// Unmap of segment 0, which holds the executing program.
    #[error("cannot unmap segment 0")]
    UnmapSegmentZero,

    /// Unmap of a segment id that is not currently mapped.
    #[error("cannot unmap segment {segment}: not mapped")]
    UnmapUnmapped { segment: u32 },
}

/// Faults raised during execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// The fetched word does not decode to an instruction.
    #[error("illegal instruction at pc {at}: {source}")]
    Decode { at: u32, source: DecodeError },

    /// A memory operation failed.
    #[error("{source} at pc {at}")]
    Memory { at: u32, source: MemoryFault },

    /// DIV with a zero divisor.
    #[error("division by zero at pc {at}")]
    DivisionByZero { at: u32 },

    /// OUT with a register value above 255.
    #[error("output value {value} exceeds 255 at pc {at}")]
    OutputOutOfRange { at: u32, value: u32 },

    /// Host input or output failed (other than EOF on input).
    #[error("host i/o failed at pc {at}: {message}")]
    Io { at: u32, message: String },
}

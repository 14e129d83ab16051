//! Error types for the Universal Machine assembler.

use thiserror::Error;

/// Errors produced during assembly of text to binary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// An opcode did not have enough arguments.
    #[error("line {line}: {opcode} expects {expected} argument(s)")]
    MissingArgument {
        line: usize,
        opcode: &'static str,
        expected: usize,
    },

    /// A register token was malformed or named a register above r7.
    #[error("line {line}: invalid register '{token}'")]
    InvalidRegister { line: usize, token: String },

    /// A numeric literal could not be parsed.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A numeric literal does not fit the field it is destined for.
    #[error("line {line}: value {value} does not fit in {width} bits")]
    ValueOutOfRange {
        line: usize,
        value: u64,
        width: u32,
    },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_opcode() {
        let e = AsmError::UnknownOpcode {
            line: 3,
            token: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: unknown opcode 'FOO'");
    }

    #[test]
    fn error_display_missing_argument() {
        let e = AsmError::MissingArgument {
            line: 7,
            opcode: "ADD",
            expected: 3,
        };
        assert_eq!(e.to_string(), "line 7: ADD expects 3 argument(s)");
    }

    #[test]
    fn error_display_invalid_register() {
        let e = AsmError::InvalidRegister {
            line: 2,
            token: "r9".to_string(),
        };
        assert_eq!(e.to_string(), "line 2: invalid register 'r9'");
    }

    #[test]
    fn error_display_value_out_of_range() {
        let e = AsmError::ValueOutOfRange {
            line: 4,
            value: 1 << 25,
            width: 25,
        };
        assert_eq!(e.to_string(), "line 4: value 33554432 does not fit in 25 bits");
    }

    #[test]
    fn error_clone_and_eq() {
        let e1 = AsmError::InvalidNumber {
            line: 1,
            token: "0xZZ".to_string(),
        };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}

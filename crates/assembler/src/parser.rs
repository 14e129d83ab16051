//! Parser for Universal Machine assembly tokens → instruction words.
//!
//! Dispatches on the mnemonic to the correct argument pattern: three
//! registers, two registers, one register, no arguments, register plus
//! immediate (LV), or a raw word literal (the WORD directive).

use crate::error::AsmError;
use crate::lexer::Token;
use um_common::opcode::ALL_OPCODES;
use um_common::{Instruction, Opcode, MAX_IMMEDIATE};

fn lookup_opcode(mnemonic: &str) -> Option<Opcode> {
    ALL_OPCODES
        .iter()
        .find(|op| op.mnemonic() == mnemonic)
        .copied()
}

/// Parse the tokens of a single line into an instruction word.
///
/// Returns `Ok(None)` for blank lines (empty token list).
pub(crate) fn parse_line(tokens: &[Token], line_num: usize) -> Result<Option<u32>, AsmError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mnemonic = match &tokens[0] {
        Token::Ident(s) => s.as_str(),
        Token::Register(r) => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: format!("r{r}"),
            })
        }
        Token::Number(n) => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: n.to_string(),
            })
        }
    };

    let args = &tokens[1..];

    // Raw data word, for program words that are not instructions.
    if mnemonic == "WORD" {
        let value = expect_number(args, 0, line_num, "WORD", 1)?;
        if value > u64::from(u32::MAX) {
            return Err(AsmError::ValueOutOfRange {
                line: line_num,
                value,
                width: 32,
            });
        }
        expect_end(&args[1..], line_num)?;
        return Ok(Some(value as u32));
    }

    let opcode = lookup_opcode(mnemonic).ok_or_else(|| AsmError::UnknownOpcode {
        line: line_num,
        token: mnemonic.to_string(),
    })?;

    let word = match opcode {
        // Three registers: A, B, C
        Opcode::Cmov
        | Opcode::Sload
        | Opcode::Sstore
        | Opcode::Add
        | Opcode::Mul
        | Opcode::Div
        | Opcode::Nand => {
            let a = expect_register(args, 0, line_num, opcode.mnemonic(), 3)?;
            let b = expect_register(args, 1, line_num, opcode.mnemonic(), 3)?;
            let c = expect_register(args, 2, line_num, opcode.mnemonic(), 3)?;
            expect_end(&args[3..], line_num)?;
            Instruction::standard(opcode, a, b, c).encode()
        }

        // No arguments
        Opcode::Halt => {
            expect_end(args, line_num)?;
            Instruction::standard(opcode, 0, 0, 0).encode()
        }

        // Two registers: B, C
        Opcode::Map | Opcode::LoadProgram => {
            let b = expect_register(args, 0, line_num, opcode.mnemonic(), 2)?;
            let c = expect_register(args, 1, line_num, opcode.mnemonic(), 2)?;
            expect_end(&args[2..], line_num)?;
            Instruction::standard(opcode, 0, b, c).encode()
        }

        // One register: C
        Opcode::Unmap | Opcode::Out | Opcode::In => {
            let c = expect_register(args, 0, line_num, opcode.mnemonic(), 1)?;
            expect_end(&args[1..], line_num)?;
            Instruction::standard(opcode, 0, 0, c).encode()
        }

        // Register plus 25-bit immediate
        Opcode::LoadValue => {
            let a = expect_register(args, 0, line_num, opcode.mnemonic(), 2)?;
            let value = expect_number(args, 1, line_num, opcode.mnemonic(), 2)?;
            if value > u64::from(MAX_IMMEDIATE) {
                return Err(AsmError::ValueOutOfRange {
                    line: line_num,
                    value,
                    width: 25,
                });
            }
            expect_end(&args[2..], line_num)?;
            Instruction::load_value(a, value as u32).encode()
        }
    };

    Ok(Some(word))
}

/// Extract a register index from the token at position `idx`.
fn expect_register(
    args: &[Token],
    idx: usize,
    line: usize,
    opcode: &'static str,
    expected: usize,
) -> Result<u32, AsmError> {
    match args.get(idx) {
        Some(Token::Register(r)) => Ok(*r),
        Some(Token::Ident(s)) => Err(AsmError::InvalidRegister {
            line,
            token: s.clone(),
        }),
        Some(Token::Number(n)) => Err(AsmError::InvalidRegister {
            line,
            token: n.to_string(),
        }),
        None => Err(AsmError::MissingArgument {
            line,
            opcode,
            expected,
        }),
    }
}

/// Extract a numeric literal from the token at position `idx`.
fn expect_number(
    args: &[Token],
    idx: usize,
    line: usize,
    opcode: &'static str,
    expected: usize,
) -> Result<u64, AsmError> {
    match args.get(idx) {
        Some(Token::Number(n)) => Ok(*n),
        Some(Token::Ident(s)) => Err(AsmError::UnexpectedToken {
            line,
            token: s.clone(),
        }),
        Some(Token::Register(r)) => Err(AsmError::UnexpectedToken {
            line,
            token: format!("r{r}"),
        }),
        None => Err(AsmError::MissingArgument {
            line,
            opcode,
            expected,
        }),
    }
}

/// Check that there are no extra tokens.
fn expect_end(remaining: &[Token], line: usize) -> Result<(), AsmError> {
    if let Some(tok) = remaining.first() {
        let token = match tok {
            Token::Ident(s) => s.clone(),
            Token::Register(r) => format!("r{r}"),
            Token::Number(n) => n.to_string(),
        };
        return Err(AsmError::UnexpectedToken { line, token });
    }
    Ok(())
}

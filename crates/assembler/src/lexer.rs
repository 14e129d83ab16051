//! Tokenizer for Universal Machine assembly text.

use crate::error::AsmError;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// An identifier (opcode mnemonic or directive). Always uppercase.
    Ident(String),
    /// A register name, r0 through r7.
    Register(u32),
    /// A numeric literal (decimal or hex).
    Number(u64),
}

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;` and extend to end of line.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    // Strip comment
    let line = match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        let token = if let Some(rest) = word.strip_prefix('r').or_else(|| word.strip_prefix('R')) {
            if rest.chars().all(|ch| ch.is_ascii_digit()) && !rest.is_empty() {
                let index: u32 = rest.parse().map_err(|_| AsmError::InvalidRegister {
                    line: line_num,
                    token: word.to_string(),
                })?;
                if index > 7 {
                    return Err(AsmError::InvalidRegister {
                        line: line_num,
                        token: word.to_string(),
                    });
                }
                Token::Register(index)
            } else {
                Token::Ident(word.to_uppercase())
            }
        } else if word.starts_with("0x") || word.starts_with("0X") {
            let value =
                u64::from_str_radix(&word[2..], 16).map_err(|_| AsmError::InvalidNumber {
                    line: line_num,
                    token: word.to_string(),
                })?;
            Token::Number(value)
        } else if word.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
            let value: u64 = word.parse().map_err(|_| AsmError::InvalidNumber {
                line: line_num,
                token: word.to_string(),
            })?;
            Token::Number(value)
        } else {
            Token::Ident(word.to_uppercase())
        };
        tokens.push(token);
    }

    Ok(tokens)
}

//! Line tokenizer.
//!
//! Each non-blank line is split on whitespace and classified by token count
//! and by whether its first token is a registered mnemonic:
//!
//! | tokens | first token a mnemonic | shape |
//! |---|---|---|
//! | 1 | - | `MNEMONIC` (operand 0) |
//! | 2 | yes | `MNEMONIC operand` |
//! | 2 | no, second is `DAT` | `label DAT` (value 0) |
//! | 2 | no | `label MNEMONIC` |
//! | 3 | - , second is `DAT` | `label DAT value` |
//! | 3 | - | `label MNEMONIC operand` |

use crate::common::error::AssembleError;
use crate::isa::OpcodeTable;
use crate::isa::opcodes::DAT_MNEMONIC;

/// A classified source statement. Tokens borrow from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    /// An executable instruction, optionally labelled.
    Instruction {
        /// Jump label bound to this instruction's address.
        label: Option<&'a str>,
        /// Mnemonic token, not yet resolved.
        mnemonic: &'a str,
        /// Operand token, literal or label; absent means 0.
        operand: Option<&'a str>,
    },
    /// A `DAT` allocation.
    Data {
        /// Label bound to the allocated cell.
        label: &'a str,
        /// Initial value token; absent means 0.
        value: Option<&'a str>,
    },
}

/// A statement with its 1-based source line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Source line number.
    pub number: usize,
    /// The classified statement.
    pub statement: Statement<'a>,
}

/// Tokenizes and classifies every non-blank line of `source`.
///
/// Mnemonics are only classified here, not resolved; an unknown mnemonic is
/// reported by the assembler.
///
/// # Errors
///
/// Returns [`AssembleError::MalformedLine`] for a line with more than three tokens.
pub fn parse<'a>(source: &'a str, table: &OpcodeTable) -> Result<Vec<Line<'a>>, AssembleError> {
    let mut lines = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        let number = idx + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let statement = match tokens[..] {
            [] => continue,
            [mnemonic] => Statement::Instruction {
                label: None,
                mnemonic,
                operand: None,
            },
            [mnemonic, operand] if table.contains_mnemonic(mnemonic) => Statement::Instruction {
                label: None,
                mnemonic,
                operand: Some(operand),
            },
            [label, DAT_MNEMONIC] => Statement::Data { label, value: None },
            [label, mnemonic] => Statement::Instruction {
                label: Some(label),
                mnemonic,
                operand: None,
            },
            [label, DAT_MNEMONIC, value] => Statement::Data {
                label,
                value: Some(value),
            },
            [label, mnemonic, operand] => Statement::Instruction {
                label: Some(label),
                mnemonic,
                operand: Some(operand),
            },
            _ => {
                return Err(AssembleError::MalformedLine {
                    line: number,
                    tokens: tokens.len(),
                });
            }
        };
        lines.push(Line { number, statement });
    }
    Ok(lines)
}

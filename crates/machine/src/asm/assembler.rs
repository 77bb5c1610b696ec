//! Two-pass assembler.
//!
//! Labels may be used before they are defined (forward branches, data
//! declared after the code that reads it), so every label is laid out before
//! any operand is resolved:
//!
//! 1. **Scan:** assign each instruction the next address from the load
//!    address; collect `DAT` allocations and labelled instructions.
//! 2. **Place data:** `DAT` cells follow the last instruction, in source order.
//! 3. **Place jump labels:** bind each labelled instruction's address.
//! 4. **Resolve and pack:** literal or label operand, packed as
//!    `(opcode << operand_bits) + operand`.
//!
//! Everything is staged in an [`Image`]; memory is only written when the
//! caller loads a successfully assembled image.

use std::collections::HashMap;

use super::parser::{Statement, parse};
use crate::common::error::AssembleError;
use crate::common::word::{Word, WordLayout};
use crate::isa::OpcodeTable;

/// An assembled program ready to be loaded at [`base`](Image::base).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Address of the first word.
    pub base: usize,
    /// Instructions followed by data cells.
    pub words: Vec<Word>,
    /// Number of instruction words at the start of `words`.
    pub instruction_count: usize,
    /// `DAT` labels and their addresses.
    pub data_symbols: HashMap<String, usize>,
    /// Instruction labels and their addresses.
    pub jump_symbols: HashMap<String, usize>,
}

impl Image {
    /// One past the last address the image occupies.
    pub fn end(&self) -> usize {
        self.base + self.words.len()
    }

    /// Address bound to `label`, looking in data symbols first.
    pub fn symbol(&self, label: &str) -> Option<usize> {
        self.data_symbols
            .get(label)
            .or_else(|| self.jump_symbols.get(label))
            .copied()
    }
}

/// Instruction recorded by the scan pass, operand still unresolved.
struct PendingInstruction<'a> {
    opcode: Word,
    operand: Option<&'a str>,
    address: usize,
    line: usize,
}

/// Translates source text into an [`Image`] using an opcode table.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'t> {
    table: &'t OpcodeTable,
    layout: WordLayout,
    memory_size: usize,
    load_address: usize,
}

impl<'t> Assembler<'t> {
    /// Creates an assembler for a machine with the given layout and memory size.
    pub const fn new(table: &'t OpcodeTable, layout: WordLayout, memory_size: usize) -> Self {
        Self {
            table,
            layout,
            memory_size,
            load_address: 0,
        }
    }

    /// Sets the address of the first instruction.
    #[must_use]
    pub const fn load_address(mut self, address: usize) -> Self {
        self.load_address = address;
        self
    }

    /// Assembles `source`.
    ///
    /// # Errors
    ///
    /// Aborts at the first [`AssembleError`]: an unknown mnemonic, a bad `DAT`
    /// literal, a duplicate label, an unresolved operand, a value that does
    /// not fit its field, or a program that does not fit in memory.
    pub fn assemble(&self, source: &str) -> Result<Image, AssembleError> {
        let lines = parse(source, self.table)?;

        let mut instructions = Vec::new();
        let mut data = Vec::new();
        let mut jumps = Vec::new();
        let mut address = self.load_address;

        for line in &lines {
            match line.statement {
                Statement::Instruction {
                    label,
                    mnemonic,
                    operand,
                } => {
                    let opcode = self.resolve_opcode(mnemonic, line.number)?;
                    if let Some(label) = label {
                        jumps.push((label, address, line.number));
                    }
                    instructions.push(PendingInstruction {
                        opcode,
                        operand,
                        address,
                        line: line.number,
                    });
                    address += 1;
                }
                Statement::Data { label, value } => {
                    let value = match value {
                        Some(token) => {
                            token
                                .parse::<Word>()
                                .map_err(|_| AssembleError::InvalidLiteral {
                                    token: token.to_string(),
                                    line: line.number,
                                })?
                        }
                        None => 0,
                    };
                    data.push((label, value, line.number));
                }
            }
        }
        tracing::debug!(
            instructions = instructions.len(),
            data = data.len(),
            labels = jumps.len(),
            "scan pass complete"
        );

        let required = address + data.len();
        if required > self.memory_size {
            return Err(AssembleError::ProgramTooLarge {
                required,
                memory_size: self.memory_size,
            });
        }

        let instruction_count = instructions.len();
        let mut words = vec![0; required - self.load_address];

        let mut data_symbols = HashMap::new();
        for (label, value, line) in data {
            if data_symbols.insert(label.to_string(), address).is_some() {
                return Err(duplicate(label, line));
            }
            words[address - self.load_address] = value;
            address += 1;
        }

        let mut jump_symbols = HashMap::new();
        for (label, target, line) in jumps {
            if data_symbols.contains_key(label)
                || jump_symbols.insert(label.to_string(), target).is_some()
            {
                return Err(duplicate(label, line));
            }
        }

        for inst in &instructions {
            let operand = match inst.operand {
                None => 0,
                Some(token) => match token.parse::<Word>() {
                    Ok(literal) => literal,
                    Err(_) => data_symbols
                        .get(token)
                        .or_else(|| jump_symbols.get(token))
                        .map(|&addr| addr as Word)
                        .ok_or_else(|| AssembleError::UnresolvedSymbol {
                            label: token.to_string(),
                            line: inst.line,
                        })?,
                },
            };
            if !self.layout.operand_fits(operand) {
                return Err(AssembleError::OperandOutOfRange {
                    value: operand,
                    line: inst.line,
                    bits: self.layout.operand_bits,
                });
            }
            words[inst.address - self.load_address] = self.layout.encode(inst.opcode, operand);
        }
        tracing::debug!(
            base = self.load_address,
            words = words.len(),
            symbols = data_symbols.len() + jump_symbols.len(),
            "assembly complete"
        );

        Ok(Image {
            base: self.load_address,
            words,
            instruction_count,
            data_symbols,
            jump_symbols,
        })
    }

    fn resolve_opcode(&self, mnemonic: &str, line: usize) -> Result<Word, AssembleError> {
        let opcode =
            self.table
                .get_opcode(mnemonic)
                .map_err(|_| AssembleError::UnknownMnemonic {
                    mnemonic: mnemonic.to_string(),
                    line,
                })?;
        if !self.layout.opcode_fits(opcode) {
            return Err(AssembleError::OpcodeOutOfRange {
                mnemonic: mnemonic.to_string(),
                opcode,
                bits: self.layout.opcode_bits,
            });
        }
        Ok(opcode)
    }
}

fn duplicate(label: &str, line: usize) -> AssembleError {
    AssembleError::DuplicateLabel {
        label: label.to_string(),
        line,
    }
}

//! Instruction disassembler.
//!
//! Renders a memory word back into assembly text for trace events, fault
//! diagnostics, and the `--disasm` listing.
//!
//! # Usage
//!
//! ```
//! use lmc_core::common::WordLayout;
//! use lmc_core::isa::OpcodeTable;
//! use lmc_core::isa::disasm::disassemble;
//!
//! let table = OpcodeTable::with_defaults();
//! let layout = WordLayout::new(4, 5);
//! assert_eq!(disassemble(layout.encode(5, 7), &table, layout), "LDA 7");
//! assert_eq!(disassemble(layout.encode(0, 0), &table, layout), "HLT");
//! assert_eq!(disassemble(-3, &table, layout), "DAT -3");
//! ```

use super::OpcodeTable;
use super::opcodes;
use crate::common::word::{Decoded, Word, WordLayout};

/// Opcodes whose operand carries no meaning and is omitted when zero.
const IMPLICIT_OPERAND: [Word; 3] = [opcodes::HLT, opcodes::OUT, opcodes::INP];

/// Disassembles one word.
///
/// Words whose opcode has no mnemonic are shown as `DAT <word>`.
pub fn disassemble(word: Word, table: &OpcodeTable, layout: WordLayout) -> String {
    let Decoded { opcode, operand } = layout.decode(word);
    match table.mnemonic(opcode) {
        Some(name) if operand == 0 && IMPLICIT_OPERAND.contains(&opcode) => name.to_string(),
        Some(name) if opcode != opcodes::DAT => format!("{name} {operand}"),
        _ => format!("DAT {word}"),
    }
}

/// Disassembles a memory range, one `address: text` line per word.
pub fn listing(memory: &[Word], table: &OpcodeTable, layout: WordLayout) -> String {
    memory
        .iter()
        .enumerate()
        .map(|(addr, &word)| format!("{addr:>4}: {:<12} ; {word}", disassemble(word, table, layout)))
        .collect::<Vec<_>>()
        .join("\n")
}

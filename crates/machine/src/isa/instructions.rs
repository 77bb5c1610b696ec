//! Static instruction definitions.
//!
//! Each instruction set is a fixed table of `(mnemonic, opcode, handler)`
//! triples, installed into an [`OpcodeTable`](super::OpcodeTable) once at
//! construction. Extensions are further tables installed on top.

use super::handlers;
use super::opcodes;
use crate::common::error::Fault;
use crate::common::word::Word;
use crate::core::cpu::Cpu;

/// A built-in instruction.
#[derive(Debug, Clone, Copy)]
pub struct InstructionDef {
    /// Assembly name.
    pub mnemonic: &'static str,
    /// Numeric opcode.
    pub opcode: Word,
    /// Effect on the machine, given the decoded operand.
    pub handler: fn(&mut Cpu, Word) -> Result<(), Fault>,
}

impl InstructionDef {
    const fn new(
        mnemonic: &'static str,
        opcode: Word,
        handler: fn(&mut Cpu, Word) -> Result<(), Fault>,
    ) -> Self {
        Self {
            mnemonic,
            opcode,
            handler,
        }
    }
}

/// The default instruction set.
pub const DEFAULT_INSTRUCTIONS: [InstructionDef; 11] = [
    InstructionDef::new("HLT", opcodes::HLT, handlers::hlt),
    InstructionDef::new("ADD", opcodes::ADD, handlers::add),
    InstructionDef::new("SUB", opcodes::SUB, handlers::sub),
    InstructionDef::new("STA", opcodes::STA, handlers::sta),
    InstructionDef::new(opcodes::DAT_MNEMONIC, opcodes::DAT, handlers::dat),
    InstructionDef::new("LDA", opcodes::LDA, handlers::lda),
    InstructionDef::new("BRA", opcodes::BRA, handlers::bra),
    InstructionDef::new("BRZ", opcodes::BRZ, handlers::brz),
    InstructionDef::new("BRP", opcodes::BRP, handlers::brp),
    InstructionDef::new("OUT", opcodes::OUT, handlers::out),
    InstructionDef::new("INP", opcodes::INP, handlers::inp),
];

/// The device I/O extension.
pub const DEVICE_IO_INSTRUCTIONS: [InstructionDef; 1] =
    [InstructionDef::new("WRT", opcodes::WRT, handlers::wrt)];

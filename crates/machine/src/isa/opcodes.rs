//! Opcode assignments.
//!
//! Defines the numeric opcode of every built-in instruction.

use crate::common::word::Word;

/// Halt execution.
pub const HLT: Word = 0;

/// Add a memory cell to the accumulator.
pub const ADD: Word = 1;

/// Subtract a memory cell from the accumulator.
pub const SUB: Word = 2;

/// Store the accumulator to memory.
pub const STA: Word = 3;

/// Data marker; a no-op if executed.
pub const DAT: Word = 4;

/// Load a memory cell into the accumulator.
pub const LDA: Word = 5;

/// Branch always.
pub const BRA: Word = 6;

/// Branch if the accumulator is zero.
pub const BRZ: Word = 7;

/// Branch if the accumulator is zero or positive.
pub const BRP: Word = 8;

/// Output the accumulator as a character.
pub const OUT: Word = 9;

/// Read an integer into the accumulator.
pub const INP: Word = 10;

/// Write the accumulator to a device (device I/O extension).
pub const WRT: Word = 11;

/// Mnemonic of the data directive, recognised by the assembler by name.
pub const DAT_MNEMONIC: &str = "DAT";

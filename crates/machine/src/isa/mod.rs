//! Instruction set definitions.
//!
//! Contains the opcode numbering, the handlers implementing each instruction,
//! the runtime-extensible opcode table, and a disassembler.
//!
//! # Instruction sets
//!
//! * Default: `HLT ADD SUB STA DAT LDA BRA BRZ BRP OUT INP` (opcodes 0-10).
//! * Device I/O extension: `WRT` (opcode 11), writes the accumulator to a device.

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Handlers implementing each instruction's effect on the machine.
pub mod handlers;

/// Static instruction definitions for the default set and extensions.
pub mod instructions;

/// Numeric opcode assignments.
pub mod opcodes;

/// Mnemonic and dispatch table.
pub mod table;

pub use instructions::{DEFAULT_INSTRUCTIONS, DEVICE_IO_INSTRUCTIONS, InstructionDef};
pub use table::{Handler, OpcodeTable};

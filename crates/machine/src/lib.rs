//! Little Man Computer emulator library.
//!
//! This crate implements a single-accumulator stored-program machine with the following:
//! 1. **ISA:** An open opcode table mapping mnemonics to opcodes and opcodes to handlers.
//! 2. **Assembler:** A two-pass loader that resolves data and jump labels before packing words.
//! 3. **Core:** The fetch-decode-execute engine, its register state, and a builder.
//! 4. **SoC:** Output devices addressable from the `WRT` extension opcode.
//! 5. **I/O:** The console used by `INP` and `OUT`, injectable for scripted runs.
//!
//! # Examples
//!
//! ```
//! use lmc_core::{MachineBuilder, MachineConfig, RunOutcome};
//! use lmc_core::io::ScriptedConsole;
//!
//! let console = ScriptedConsole::new(Vec::<String>::new());
//! let output = console.output();
//! let mut machine = MachineBuilder::new(MachineConfig::default())
//!     .console(Box::new(console))
//!     .build()
//!     .unwrap();
//!
//! machine.assemble_and_load("LDA five\nADD five\nOUT\nHLT\nfive DAT 32").unwrap();
//! assert!(matches!(machine.run(0), RunOutcome::Halted { .. }));
//! assert_eq!(machine.cpu().acc, 64);
//! assert_eq!(output.contents(), "@");
//! ```

/// Common types (word layout, errors, constants).
pub mod common;
/// Machine configuration (defaults, JSON loading, validation).
pub mod config;
/// Instruction set (opcode table, default handlers, disassembler).
pub mod isa;
/// Assembly source parsing and the two-pass assembler.
pub mod asm;
/// Machine state, execution engine, and builder.
pub mod core;
/// Output devices and the device registry.
pub mod soc;
/// Console abstraction for `INP`/`OUT`.
pub mod io;

/// Root configuration type; use `MachineConfig::default()` or deserialize from JSON.
pub use crate::config::MachineConfig;
/// Assembled memory image with its symbol tables.
pub use crate::asm::{Assembler, Image};
/// Engine types: the machine, its builder, and run results.
pub use crate::core::{Cpu, FaultReport, Machine, MachineBuilder, RunOutcome};
/// Error types for assembly, execution, and configuration.
pub use crate::common::error::{AssembleError, ConfigError, Fault, LmcError};
/// Opcode table type.
pub use crate::isa::OpcodeTable;

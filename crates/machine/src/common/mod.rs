//! Common utilities and types shared across the emulator.
//!
//! This module provides:
//! 1. **Word Layout:** Packing and unpacking of opcode/operand fields.
//! 2. **Constants:** Default field widths and console prompt.
//! 3. **Error Handling:** Assembly, run-time, and configuration error types.

/// Default field widths and other machine constants.
pub mod constants;

/// Error types for assembly, execution, and configuration.
pub mod error;

/// Word type and opcode/operand field layout.
pub mod word;

pub use error::{AssembleError, ConfigError, Fault, LmcError, UnknownMnemonic};
pub use word::{Decoded, Word, WordLayout};

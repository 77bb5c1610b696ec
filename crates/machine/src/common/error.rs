//! Error types for assembly, execution, and configuration.
//!
//! This module defines:
//! 1. **Assembly Errors:** Failures raised while translating source into an image.
//! 2. **Faults:** Run-time failures that stop the execution loop.
//! 3. **Configuration Errors:** Machine parameters that cannot be represented.
//! 4. **Umbrella Error:** A single type for front ends that surface all of the above.

use thiserror::Error;

use super::word::Word;

/// Assembly-time failure. Assembly aborts at the first one; nothing is loaded.
///
/// Line numbers are 1-based positions in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// A token in mnemonic position names no registered instruction.
    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic {
        /// The offending token.
        mnemonic: String,
        /// Source line.
        line: usize,
    },

    /// An operand is neither an integer literal nor a known label.
    #[error("line {line}: unresolved symbol `{label}`")]
    UnresolvedSymbol {
        /// The offending label.
        label: String,
        /// Source line.
        line: usize,
    },

    /// The value of a `DAT` allocation is not an integer.
    #[error("line {line}: invalid integer literal `{token}`")]
    InvalidLiteral {
        /// The offending token.
        token: String,
        /// Source line.
        line: usize,
    },

    /// A label is defined twice (as data, jump target, or both).
    #[error("line {line}: duplicate label `{label}`")]
    DuplicateLabel {
        /// The offending label.
        label: String,
        /// Source line of the second definition.
        line: usize,
    },

    /// A statement has more than three tokens.
    #[error("line {line}: expected at most 3 tokens, found {tokens}")]
    MalformedLine {
        /// Source line.
        line: usize,
        /// Number of tokens found.
        tokens: usize,
    },

    /// A resolved operand does not fit the operand field.
    #[error("line {line}: operand {value} does not fit in {bits} bits")]
    OperandOutOfRange {
        /// The resolved operand.
        value: Word,
        /// Source line.
        line: usize,
        /// Operand field width.
        bits: u32,
    },

    /// A registered opcode does not fit the opcode field.
    #[error("opcode {opcode} of `{mnemonic}` does not fit in {bits} bits")]
    OpcodeOutOfRange {
        /// Mnemonic being assembled.
        mnemonic: String,
        /// Its opcode.
        opcode: Word,
        /// Opcode field width.
        bits: u32,
    },

    /// Instructions and data do not fit in memory.
    #[error("program needs {required} words but memory holds {memory_size}")]
    ProgramTooLarge {
        /// Words needed, counted from address 0.
        required: usize,
        /// Memory size in words.
        memory_size: usize,
    },
}

/// Run-time failure raised while fetching, decoding, or dispatching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// No handler is registered for the decoded opcode.
    #[error("unknown opcode {0}")]
    UnknownOpcode(Word),

    /// A fetch, load, or store touched an address outside memory.
    #[error("memory address {address} out of range (memory holds {memory_size} words)")]
    MemoryOutOfBounds {
        /// Faulting address.
        address: Word,
        /// Memory size in words.
        memory_size: usize,
    },

    /// `WRT` addressed a device index that was never registered.
    #[error("device index {index} out of range ({devices} registered)")]
    DeviceIndexOutOfRange {
        /// Requested index.
        index: Word,
        /// Number of registered devices.
        devices: usize,
    },

    /// A device rejected a write.
    #[error("device {index} failed: {message}")]
    DeviceFailure {
        /// Device index.
        index: usize,
        /// Failure description.
        message: String,
    },

    /// `OUT` found an accumulator that is not a Unicode scalar value.
    #[error("accumulator value {0} is not a character")]
    InvalidCharacter(Word),

    /// The console reached end of input while `INP` was waiting.
    #[error("input exhausted")]
    InputExhausted,

    /// `INP` gave up after the configured number of unparseable lines.
    #[error("invalid input `{text}`")]
    InvalidInput {
        /// The last rejected line.
        text: String,
    },

    /// The console failed to read or write.
    #[error("console error: {0}")]
    Console(String),

    /// The configured instruction budget ran out before `HLT`.
    #[error("step limit of {0} instructions exceeded")]
    StepLimitExceeded(u64),
}

/// Machine parameters that cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Memory must hold at least one word.
    #[error("memory size must be non-zero")]
    InvalidMemorySize,

    /// The opcode field must be at least one bit wide.
    #[error("opcode field must be at least one bit wide")]
    InvalidOpcodeBits,

    /// Opcode plus operand width exceeds what a word can hold.
    #[error("word width of {bits} bits exceeds the supported maximum")]
    WordTooWide {
        /// Requested total width.
        bits: u32,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(String),
}

/// Umbrella error for front ends.
#[derive(Debug, Error)]
pub enum LmcError {
    /// Assembly failed.
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Execution faulted outside the run loop (e.g. from `step`).
    #[error(transparent)]
    Fault(#[from] Fault),

    /// Reading a program or configuration failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lookup of a mnemonic the opcode table does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mnemonic `{0}`")]
pub struct UnknownMnemonic(pub String);

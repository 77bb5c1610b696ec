//! Mnemonic and dispatch table.
//!
//! The table is two maps: mnemonic name to opcode (used by the assembler) and
//! opcode to handler (used by the engine). Both accept overwrites, last write
//! wins. New instructions are added by registering more entries; the engine
//! itself never changes.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::instructions::{DEFAULT_INSTRUCTIONS, DEVICE_IO_INSTRUCTIONS, InstructionDef};
use crate::common::error::{Fault, UnknownMnemonic};
use crate::common::word::Word;
use crate::core::cpu::Cpu;

/// Boxed instruction handler taking the decoded operand.
pub type Handler = Box<dyn Fn(&mut Cpu, Word) -> Result<(), Fault> + Send + Sync>;

/// Bidirectional mnemonic/opcode mapping plus opcode dispatch.
#[derive(Default)]
pub struct OpcodeTable {
    mnemonics: BTreeMap<String, Word>,
    handlers: HashMap<Word, Handler>,
}

impl OpcodeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the default instruction set.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.install(&DEFAULT_INSTRUCTIONS);
        table
    }

    /// Creates a table holding the default set plus the device I/O extension.
    pub fn with_device_io() -> Self {
        let mut table = Self::with_defaults();
        table.install(&DEVICE_IO_INSTRUCTIONS);
        table
    }

    /// Registers every instruction of a static set.
    pub fn install(&mut self, set: &[InstructionDef]) {
        for def in set {
            self.register_mnemonic(def.mnemonic, def.opcode);
            self.register_opcode_handler(def.opcode, def.handler);
        }
    }

    /// Maps `name` to `opcode`, replacing any previous mapping of `name`.
    pub fn register_mnemonic(&mut self, name: impl Into<String>, opcode: Word) {
        let _ = self.mnemonics.insert(name.into(), opcode);
    }

    /// Binds `opcode` to `handler`, replacing any previous handler.
    pub fn register_opcode_handler<F>(&mut self, opcode: Word, handler: F)
    where
        F: Fn(&mut Cpu, Word) -> Result<(), Fault> + Send + Sync + 'static,
    {
        let _ = self.handlers.insert(opcode, Box::new(handler));
    }

    /// Registers a mnemonic and its handler in one step.
    pub fn register<F>(&mut self, name: impl Into<String>, opcode: Word, handler: F)
    where
        F: Fn(&mut Cpu, Word) -> Result<(), Fault> + Send + Sync + 'static,
    {
        self.register_mnemonic(name, opcode);
        self.register_opcode_handler(opcode, handler);
    }

    /// Looks up the opcode for a mnemonic.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMnemonic`] if `name` was never registered.
    pub fn get_opcode(&self, name: &str) -> Result<Word, UnknownMnemonic> {
        self.mnemonics
            .get(name)
            .copied()
            .ok_or_else(|| UnknownMnemonic(name.to_string()))
    }

    /// Returns `true` if `name` is a registered mnemonic.
    pub fn contains_mnemonic(&self, name: &str) -> bool {
        self.mnemonics.contains_key(name)
    }

    /// Reverse lookup: a mnemonic mapped to `opcode`, if any.
    ///
    /// When several names share an opcode the alphabetically first is returned.
    pub fn mnemonic(&self, opcode: Word) -> Option<&str> {
        self.mnemonics
            .iter()
            .find(|&(_, &op)| op == opcode)
            .map(|(name, _)| name.as_str())
    }

    /// Handler bound to `opcode`, if any.
    pub fn handler(&self, opcode: Word) -> Option<&Handler> {
        self.handlers.get(&opcode)
    }

    /// Invokes the handler for `opcode`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnknownOpcode`] if no handler is bound, otherwise
    /// whatever the handler returns.
    pub fn dispatch(&self, cpu: &mut Cpu, opcode: Word, operand: Word) -> Result<(), Fault> {
        let handler = self
            .handlers
            .get(&opcode)
            .ok_or(Fault::UnknownOpcode(opcode))?;
        handler(cpu, operand)
    }

    /// Registered mnemonics with their opcodes, ordered by name.
    pub fn mnemonics(&self) -> impl Iterator<Item = (&str, Word)> {
        self.mnemonics.iter().map(|(name, &op)| (name.as_str(), op))
    }

    /// Number of opcodes with a bound handler.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<_> = self.handlers.keys().copied().collect();
        handlers.sort_unstable();
        f.debug_struct("OpcodeTable")
            .field("mnemonics", &self.mnemonics)
            .field("handlers", &handlers)
            .finish()
    }
}

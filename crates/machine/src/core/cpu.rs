//! Architectural state.
//!
//! The [`Cpu`] is everything an instruction handler may touch: the
//! accumulator, the program counter, the halt flag, memory, the device
//! registry, and the console. Handlers reach memory only through
//! [`Cpu::read`] and [`Cpu::write`], which bounds-check every address.

use std::fmt;

use crate::common::error::Fault;
use crate::common::word::{Decoded, Word};
use crate::io::Console;
use crate::soc::DeviceRegistry;

/// Machine registers, memory, and attached I/O.
pub struct Cpu {
    /// The accumulator.
    pub acc: Word,
    /// Address of the instruction being executed, then of the next one.
    pub pc: usize,
    /// Set by `HLT`; ends the run loop.
    pub halted: bool,
    /// Output devices addressed by `WRT`.
    pub devices: DeviceRegistry,
    memory: Vec<Word>,
    console: Box<dyn Console>,
    input_retries: Option<u32>,
    branch_taken: bool,
    current: Option<Decoded>,
}

impl Cpu {
    /// Creates a zeroed machine state.
    ///
    /// # Arguments
    ///
    /// * `memory_size` - Number of words of memory.
    /// * `console` - Source for `INP`, sink for `OUT`.
    /// * `devices` - Devices addressable by `WRT`.
    /// * `input_retries` - Unparseable `INP` lines tolerated before faulting; `None` retries forever.
    pub fn new(
        memory_size: usize,
        console: Box<dyn Console>,
        devices: DeviceRegistry,
        input_retries: Option<u32>,
    ) -> Self {
        Self {
            acc: 0,
            pc: 0,
            halted: false,
            devices,
            memory: vec![0; memory_size],
            console,
            input_retries,
            branch_taken: false,
            current: None,
        }
    }

    /// Memory contents.
    pub fn memory(&self) -> &[Word] {
        &self.memory
    }

    /// Reads the word at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] if `address` is negative or past the end.
    #[inline]
    pub fn read(&self, address: Word) -> Result<Word, Fault> {
        usize::try_from(address)
            .ok()
            .and_then(|a| self.memory.get(a))
            .copied()
            .ok_or(Fault::MemoryOutOfBounds {
                address,
                memory_size: self.memory.len(),
            })
    }

    /// Writes `value` at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] if `address` is negative or past the end.
    #[inline]
    pub fn write(&mut self, address: Word, value: Word) -> Result<(), Fault> {
        let memory_size = self.memory.len();
        let cell = usize::try_from(address)
            .ok()
            .and_then(|a| self.memory.get_mut(a))
            .ok_or(Fault::MemoryOutOfBounds {
                address,
                memory_size,
            })?;
        *cell = value;
        Ok(())
    }

    /// Copies `words` into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfBounds`] naming the first address past the
    /// end of memory; nothing is written in that case.
    pub fn load(&mut self, base: usize, words: &[Word]) -> Result<(), Fault> {
        let end = base + words.len();
        if end > self.memory.len() {
            return Err(Fault::MemoryOutOfBounds {
                address: self.memory.len().max(base) as Word,
                memory_size: self.memory.len(),
            });
        }
        self.memory[base..end].copy_from_slice(words);
        Ok(())
    }

    /// Transfers control to `target`.
    ///
    /// The engine skips its post-instruction increment after a jump, so the
    /// next fetch happens exactly at `target`.
    #[inline]
    pub fn jump(&mut self, target: Word) {
        self.pc = target as usize;
        self.branch_taken = true;
    }

    /// The instruction being executed, once decoded.
    pub const fn current(&self) -> Option<Decoded> {
        self.current
    }

    /// Reads lines from the console until one parses as an integer.
    ///
    /// Surrounding whitespace is ignored. Each rejected line is logged; with a
    /// retry bound configured, the line past the bound faults.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InputExhausted`] at end of input,
    /// [`Fault::InvalidInput`] once the retry bound is exceeded, or
    /// [`Fault::Console`] if reading fails.
    pub fn read_input(&mut self) -> Result<Word, Fault> {
        let mut rejected = 0u32;
        loop {
            let line = self
                .console
                .read_line()
                .map_err(|e| Fault::Console(e.to_string()))?
                .ok_or(Fault::InputExhausted)?;
            if let Ok(value) = line.trim().parse::<Word>() {
                return Ok(value);
            }
            tracing::warn!(input = %line, "input is not an integer, asking again");
            rejected += 1;
            if self.input_retries.is_some_and(|limit| rejected > limit) {
                return Err(Fault::InvalidInput { text: line });
            }
        }
    }

    /// Emits a character on the console.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::Console`] if writing fails.
    pub fn emit(&mut self, ch: char) -> Result<(), Fault> {
        self.console
            .write_char(ch)
            .map_err(|e| Fault::Console(e.to_string()))
    }

    /// Replaces the console.
    pub fn set_console(&mut self, console: Box<dyn Console>) {
        self.console = console;
    }

    /// Clears per-run state and positions the program counter.
    pub(crate) fn reset_for_run(&mut self, start: usize) {
        self.halted = false;
        self.pc = start;
        self.branch_taken = false;
        self.current = None;
    }

    /// Records the decoded instruction about to be dispatched.
    pub(crate) fn begin(&mut self, decoded: Decoded) {
        self.current = Some(decoded);
        self.branch_taken = false;
    }

    /// Advances past the executed instruction unless it jumped.
    pub(crate) fn retire(&mut self) {
        if !self.branch_taken {
            self.pc += 1;
        }
        self.branch_taken = false;
    }

    /// Forgets the decoded instruction before a new fetch.
    pub(crate) fn clear_current(&mut self) {
        self.current = None;
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("acc", &self.acc)
            .field("pc", &self.pc)
            .field("halted", &self.halted)
            .field("memory_size", &self.memory.len())
            .field("devices", &self.devices)
            .finish_non_exhaustive()
    }
}

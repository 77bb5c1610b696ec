//! Fetch-decode-execute engine.
//!
//! The [`Machine`] owns the [`Cpu`] and the [`OpcodeTable`]. Each step:
//! 1. **Fetch:** read the word at the program counter.
//! 2. **Decode:** split it into opcode and operand with the configured layout.
//! 3. **Dispatch:** invoke the opcode's handler.
//! 4. **Retire:** advance the program counter unless the handler jumped.
//!
//! [`Machine::run`] repeats until `HLT` or a fault. Faults never escape the
//! loop: they come back as [`RunOutcome::Faulted`] with a diagnostic report.

use std::fmt;

use super::builder::MachineBuilder;
use super::cpu::Cpu;
use crate::asm::{Assembler, Image};
use crate::common::error::{AssembleError, ConfigError, Fault};
use crate::common::word::{Word, WordLayout};
use crate::config::MachineConfig;
use crate::isa::OpcodeTable;
use crate::isa::disasm::disassemble;
use crate::soc::DeviceRegistry;

/// Result of a single [`Machine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The instruction executed and the machine is still running.
    Continue,
    /// The instruction set the halt flag.
    Halted,
}

/// Diagnostic snapshot taken when a run faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReport {
    /// What went wrong.
    pub fault: Fault,
    /// Program counter at the time of the fault.
    pub pc: usize,
    /// Decoded opcode; `None` if the fetch itself faulted.
    pub opcode: Option<Word>,
    /// Decoded operand; `None` if the fetch itself faulted.
    pub operand: Option<Word>,
    /// Instructions completed before the fault.
    pub steps: u64,
    /// Full memory contents.
    pub memory: Vec<Word>,
}

impl fmt::Display for FaultReport {
    /// Renders opcode, operand, error, and memory dump, in that order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |v: Option<Word>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        writeln!(
            f,
            "opcode={}, operand={}",
            field(self.opcode),
            field(self.operand)
        )?;
        writeln!(f, "catastrophic failure: {} (pc={})", self.fault, self.pc)?;
        write!(f, "memory dump: {:?}", self.memory)
    }
}

/// How a run ended.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `HLT` executed after `steps` instructions (including the `HLT`).
    Halted {
        /// Instructions executed.
        steps: u64,
    },
    /// A fault stopped the run.
    Faulted(FaultReport),
}

impl RunOutcome {
    /// Returns `true` for a normal halt.
    pub const fn is_halted(&self) -> bool {
        matches!(self, Self::Halted { .. })
    }

    /// The fault report, if the run faulted.
    pub const fn fault(&self) -> Option<&FaultReport> {
        match self {
            Self::Faulted(report) => Some(report),
            Self::Halted { .. } => None,
        }
    }
}

/// A configured machine: state, instruction table, and word layout.
pub struct Machine {
    cpu: Cpu,
    table: OpcodeTable,
    layout: WordLayout,
    config: MachineConfig,
}

impl Machine {
    /// Builds a machine with a terminal console and no devices.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] if `config` fails validation.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigError> {
        MachineBuilder::new(config).build()
    }

    pub(crate) fn from_parts(cpu: Cpu, table: OpcodeTable, config: MachineConfig) -> Self {
        Self {
            cpu,
            table,
            layout: config.layout(),
            config,
        }
    }

    /// Machine state.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable machine state.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// The instruction table.
    pub const fn table(&self) -> &OpcodeTable {
        &self.table
    }

    /// Mutable instruction table, for registering further instructions.
    pub fn table_mut(&mut self) -> &mut OpcodeTable {
        &mut self.table
    }

    /// Attached devices.
    pub fn devices_mut(&mut self) -> &mut DeviceRegistry {
        &mut self.cpu.devices
    }

    /// Field widths in effect.
    pub const fn layout(&self) -> WordLayout {
        self.layout
    }

    /// The configuration the machine was built from.
    pub const fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// An assembler targeting this machine's table, layout, and memory size.
    pub fn assembler(&self) -> Assembler<'_> {
        Assembler::new(&self.table, self.layout, self.config.memory_size)
            .load_address(self.config.load_address)
    }

    /// Assembles `source` without touching memory.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssembleError`].
    pub fn assemble(&self, source: &str) -> Result<Image, AssembleError> {
        self.assembler().assemble(source)
    }

    /// Copies an assembled image into memory.
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError::ProgramTooLarge`] if the image extends past
    /// the end of memory; memory is left untouched.
    pub fn load_image(&mut self, image: &Image) -> Result<(), AssembleError> {
        let memory_size = self.cpu.memory().len();
        self.cpu
            .load(image.base, &image.words)
            .map_err(|_| AssembleError::ProgramTooLarge {
                required: image.end(),
                memory_size,
            })?;
        tracing::debug!(base = image.base, words = image.words.len(), "image loaded");
        Ok(())
    }

    /// Assembles `source` and loads it; memory changes only on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`AssembleError`].
    pub fn assemble_and_load(&mut self, source: &str) -> Result<Image, AssembleError> {
        let image = self.assemble(source)?;
        self.load_image(&image)?;
        Ok(image)
    }

    /// Executes one instruction at the program counter.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by fetch or dispatch. The program counter
    /// is left on the faulting instruction.
    pub fn step(&mut self) -> Result<StepResult, Fault> {
        self.cpu.clear_current();
        let pc = self.cpu.pc;
        let word = self.cpu.read(pc as Word)?;
        let decoded = self.layout.decode(word);
        self.cpu.begin(decoded);

        if self.config.trace_instructions {
            tracing::trace!(
                pc,
                acc = self.cpu.acc,
                word,
                asm = %disassemble(word, &self.table, self.layout),
                "execute"
            );
        }

        self.table
            .dispatch(&mut self.cpu, decoded.opcode, decoded.operand)?;
        self.cpu.retire();

        Ok(if self.cpu.halted {
            StepResult::Halted
        } else {
            StepResult::Continue
        })
    }

    /// Runs from `start` until `HLT` or a fault.
    ///
    /// The halt flag is cleared first, so a halted machine can be run again.
    /// A configured step limit turns a runaway program into a fault.
    pub fn run(&mut self, start: usize) -> RunOutcome {
        self.cpu.reset_for_run(start);
        let mut steps = 0u64;
        loop {
            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    self.cpu.clear_current();
                    return self.faulted(Fault::StepLimitExceeded(limit), steps);
                }
            }
            match self.step() {
                Ok(StepResult::Continue) => steps += 1,
                Ok(StepResult::Halted) => {
                    steps += 1;
                    tracing::info!(steps, acc = self.cpu.acc, "halted");
                    return RunOutcome::Halted { steps };
                }
                Err(fault) => return self.faulted(fault, steps),
            }
        }
    }

    fn faulted(&self, fault: Fault, steps: u64) -> RunOutcome {
        let current = self.cpu.current();
        tracing::error!(pc = self.cpu.pc, %fault, steps, "run faulted");
        RunOutcome::Faulted(FaultReport {
            fault,
            pc: self.cpu.pc,
            opcode: current.map(|d| d.opcode),
            operand: current.map(|d| d.operand),
            steps,
            memory: self.cpu.memory().to_vec(),
        })
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("cpu", &self.cpu)
            .field("table", &self.table)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

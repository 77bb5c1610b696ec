//! Machine core.
//!
//! This module contains the execution side of the emulator:
//! 1. **Cpu:** Accumulator, program counter, halt flag, memory, devices, and console.
//! 2. **Engine:** The fetch-decode-execute loop and its typed run result.
//! 3. **Builder:** Assembly of a machine from configuration and injected collaborators.

/// Construction of a [`Machine`] from configuration.
pub mod builder;

/// Architectural state owned by the engine.
pub mod cpu;

/// Fetch-decode-execute loop.
pub mod engine;

pub use builder::MachineBuilder;
pub use cpu::Cpu;
pub use engine::{FaultReport, Machine, RunOutcome, StepResult};

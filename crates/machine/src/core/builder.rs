//! Machine construction.
//!
//! The builder turns a [`MachineConfig`] into a [`Machine`]. It performs:
//! 1. **Validation:** Rejects configurations a word cannot represent.
//! 2. **Instruction set:** Installs the default set and, when enabled, the device I/O extension.
//! 3. **Injection:** Attaches the console and devices, and any caller-supplied instructions.
//!
//! Extending the machine never means changing the engine: extra behaviour is
//! one more `(mnemonic, opcode, handler)` registration.

use super::cpu::Cpu;
use super::engine::Machine;
use crate::common::error::{ConfigError, Fault};
use crate::common::word::Word;
use crate::config::MachineConfig;
use crate::io::{Console, StdConsole};
use crate::isa::{Handler, InstructionDef, OpcodeTable};
use crate::soc::{Device, DeviceRegistry};

/// Builder for [`Machine`].
///
/// # Examples
///
/// ```
/// use lmc_core::{MachineBuilder, MachineConfig};
/// use lmc_core::io::ScriptedConsole;
///
/// let mut config = MachineConfig::default();
/// config.device_io = true;
/// let machine = MachineBuilder::new(config)
///     .console(Box::new(ScriptedConsole::new(["7"])))
///     .register("NOP", 12, |_cpu, _operand| Ok(()))
///     .build()
///     .unwrap();
/// assert_eq!(machine.table().get_opcode("WRT"), Ok(11));
/// assert_eq!(machine.table().get_opcode("NOP"), Ok(12));
/// ```
pub struct MachineBuilder {
    config: MachineConfig,
    console: Option<Box<dyn Console>>,
    devices: DeviceRegistry,
    extensions: Vec<&'static [InstructionDef]>,
    custom: Vec<(String, Word, Handler)>,
}

impl MachineBuilder {
    /// Starts a builder from `config`.
    pub fn new(config: MachineConfig) -> Self {
        Self {
            config,
            console: None,
            devices: DeviceRegistry::new(),
            extensions: Vec::new(),
            custom: Vec::new(),
        }
    }

    /// Uses `console` for `INP` and `OUT` instead of the terminal.
    #[must_use]
    pub fn console(mut self, console: Box<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Appends a device; its index is the number of devices added before it.
    #[must_use]
    pub fn device(mut self, device: Box<dyn Device>) -> Self {
        let _ = self.devices.register(device);
        self
    }

    /// Replaces the device registry.
    #[must_use]
    pub fn devices(mut self, devices: DeviceRegistry) -> Self {
        self.devices = devices;
        self
    }

    /// Installs a static instruction set after the configured ones.
    #[must_use]
    pub fn instructions(mut self, set: &'static [InstructionDef]) -> Self {
        self.extensions.push(set);
        self
    }

    /// Registers one instruction after all static sets.
    #[must_use]
    pub fn register<F>(mut self, mnemonic: impl Into<String>, opcode: Word, handler: F) -> Self
    where
        F: Fn(&mut Cpu, Word) -> Result<(), Fault> + Send + Sync + 'static,
    {
        self.custom
            .push((mnemonic.into(), opcode, Box::new(handler)));
        self
    }

    /// Builds the machine.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] if the configuration fails validation.
    pub fn build(self) -> Result<Machine, ConfigError> {
        self.config.validate()?;

        let mut table = if self.config.register_default {
            OpcodeTable::with_defaults()
        } else {
            OpcodeTable::new()
        };
        if self.config.device_io {
            table.install(&crate::isa::DEVICE_IO_INSTRUCTIONS);
        }
        for set in self.extensions {
            table.install(set);
        }
        for (mnemonic, opcode, handler) in self.custom {
            table.register_mnemonic(mnemonic, opcode);
            table.register_opcode_handler(opcode, handler);
        }

        let console = self
            .console
            .unwrap_or_else(|| Box::new(StdConsole::new()));
        let cpu = Cpu::new(
            self.config.memory_size,
            console,
            self.devices,
            self.config.input_retries,
        );
        tracing::debug!(
            memory_size = self.config.memory_size,
            layout = ?self.config.layout(),
            instructions = table.handler_count(),
            devices = cpu.devices.len(),
            "machine built"
        );
        Ok(Machine::from_parts(cpu, table, self.config))
    }
}

impl std::fmt::Debug for MachineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineBuilder")
            .field("config", &self.config)
            .field("devices", &self.devices)
            .finish_non_exhaustive()
    }
}

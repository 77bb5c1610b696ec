//! Configuration for the emulated machine.
//!
//! This module defines the parameters a machine is built from. It provides:
//! 1. **Defaults:** Memory size and field widths matching the classic machine.
//! 2. **Structure:** A flat `MachineConfig` deserializable from JSON with per-field defaults.
//! 3. **Validation:** Rejection of parameters a word cannot represent.
//!
//! Field widths are not cross-checked against memory size or the opcode
//! table; the assembler rejects any value that does not fit its field.

use serde::Deserialize;

use crate::common::constants::{
    DEFAULT_MEMORY_SIZE, DEFAULT_OPCODE_BITS, LEGACY_WORD_BITS, MAX_WORD_BITS,
};
use crate::common::error::ConfigError;
use crate::common::word::WordLayout;

/// Machine configuration.
///
/// # Examples
///
/// ```
/// use lmc_core::config::MachineConfig;
///
/// let config = MachineConfig::default();
/// assert_eq!(config.memory_size, 200);
/// assert_eq!(config.layout().operand_bits, 5);
///
/// let config = MachineConfig::from_json(r#"{ "operand_bits": 28, "device_io": true }"#).unwrap();
/// assert_eq!(config.layout().operand_bits, 28);
/// assert!(config.device_io);
/// assert!(config.register_default);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Number of words in memory.
    #[serde(default = "MachineConfig::default_memory_size")]
    pub memory_size: usize,

    /// Width of the opcode field in bits.
    #[serde(default = "MachineConfig::default_opcode_bits")]
    pub opcode_bits: u32,

    /// Width of the operand field in bits; derived from the legacy 8-bit
    /// word when unset.
    #[serde(default)]
    pub operand_bits: Option<u32>,

    /// Install the default eleven-instruction set.
    #[serde(default = "MachineConfig::default_register_default")]
    pub register_default: bool,

    /// Install the `WRT` device extension.
    #[serde(default)]
    pub device_io: bool,

    /// Address the assembler places the first instruction at.
    #[serde(default)]
    pub load_address: usize,

    /// Number of unparseable lines `INP` tolerates before faulting; unbounded when unset.
    #[serde(default)]
    pub input_retries: Option<u32>,

    /// Instruction budget for a single run; unbounded when unset.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Emit a trace event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl MachineConfig {
    fn default_memory_size() -> usize {
        DEFAULT_MEMORY_SIZE
    }

    fn default_opcode_bits() -> u32 {
        DEFAULT_OPCODE_BITS
    }

    fn default_register_default() -> bool {
        true
    }

    /// Parses a configuration from JSON; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, or
    /// the [`validate`](Self::validate) error for unrepresentable parameters.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolved field widths.
    ///
    /// An unset operand width becomes the legacy word width minus the opcode
    /// width (saturating at zero).
    pub fn layout(&self) -> WordLayout {
        let operand_bits = self
            .operand_bits
            .unwrap_or_else(|| LEGACY_WORD_BITS.saturating_sub(self.opcode_bits));
        WordLayout::new(self.opcode_bits, operand_bits)
    }

    /// Checks that memory is non-empty and that a word can hold both fields.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::InvalidMemorySize);
        }
        if self.opcode_bits == 0 {
            return Err(ConfigError::InvalidOpcodeBits);
        }
        let bits = self.layout().word_bits();
        if bits > MAX_WORD_BITS {
            return Err(ConfigError::WordTooWide { bits });
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_size: DEFAULT_MEMORY_SIZE,
            opcode_bits: DEFAULT_OPCODE_BITS,
            operand_bits: None,
            register_default: true,
            device_io: false,
            load_address: 0,
            input_retries: None,
            max_steps: None,
            trace_instructions: false,
        }
    }
}

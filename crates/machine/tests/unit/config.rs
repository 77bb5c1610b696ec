//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and validation.

use lmc_core::ConfigError;
use lmc_core::common::WordLayout;
use lmc_core::config::MachineConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = MachineConfig::default();
    assert_eq!(config.memory_size, 200);
    assert_eq!(config.opcode_bits, 4);
    assert_eq!(config.operand_bits, None);
    assert!(config.register_default);
    assert!(!config.device_io);
    assert_eq!(config.load_address, 0);
    assert_eq!(config.input_retries, None);
    assert_eq!(config.max_steps, None);
    assert!(!config.trace_instructions);
}

#[test]
fn test_operand_bits_derived_from_legacy_word() {
    let config = MachineConfig::default();
    assert_eq!(config.layout(), WordLayout::new(4, 5));

    let config = MachineConfig {
        opcode_bits: 3,
        ..MachineConfig::default()
    };
    assert_eq!(config.layout(), WordLayout::new(3, 6));
}

#[test]
fn test_explicit_operand_bits_win() {
    let config = MachineConfig {
        operand_bits: Some(28),
        ..MachineConfig::default()
    };
    assert_eq!(config.layout(), WordLayout::new(4, 28));
}

#[test]
fn test_from_json_empty_object_is_default() {
    let config = MachineConfig::from_json("{}").unwrap();
    assert_eq!(config, MachineConfig::default());
}

#[test]
fn test_from_json_full() {
    let json = r#"{
        "memory_size": 100,
        "opcode_bits": 4,
        "operand_bits": 7,
        "register_default": true,
        "device_io": true,
        "load_address": 10,
        "input_retries": 3,
        "max_steps": 1000,
        "trace_instructions": true
    }"#;
    let config = MachineConfig::from_json(json).unwrap();
    assert_eq!(config.memory_size, 100);
    assert_eq!(config.layout(), WordLayout::new(4, 7));
    assert!(config.device_io);
    assert_eq!(config.load_address, 10);
    assert_eq!(config.input_retries, Some(3));
    assert_eq!(config.max_steps, Some(1000));
    assert!(config.trace_instructions);
}

#[test]
fn test_from_json_rejects_unknown_fields() {
    let err = MachineConfig::from_json(r#"{ "memroy_size": 10 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "memory_size": 64, "operand_bits": 6 }"#)
        .unwrap();
    file.flush().unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let config = MachineConfig::from_json(&text).unwrap();
    assert_eq!(config.memory_size, 64);
    assert_eq!(config.layout().operand_bits, 6);
}

#[test]
fn test_validate_rejects_unrepresentable() {
    let zero_memory = MachineConfig {
        memory_size: 0,
        ..MachineConfig::default()
    };
    assert_eq!(zero_memory.validate(), Err(ConfigError::InvalidMemorySize));

    let zero_opcode = MachineConfig {
        opcode_bits: 0,
        operand_bits: Some(8),
        ..MachineConfig::default()
    };
    assert_eq!(zero_opcode.validate(), Err(ConfigError::InvalidOpcodeBits));

    let too_wide = MachineConfig {
        opcode_bits: 8,
        operand_bits: Some(60),
        ..MachineConfig::default()
    };
    assert_eq!(
        too_wide.validate(),
        Err(ConfigError::WordTooWide { bits: 68 })
    );
}

#[test]
fn test_validate_allows_operand_narrower_than_memory() {
    // 5 operand bits cannot address 200 words; the assembler reports this per operand.
    assert_eq!(MachineConfig::default().validate(), Ok(()));
}

//! # Error Display Tests

use lmc_core::{AssembleError, ConfigError, Fault, LmcError};

#[test]
fn test_assemble_error_names_offending_token() {
    let err = AssembleError::UnresolvedSymbol {
        label: "missing".to_string(),
        line: 3,
    };
    assert_eq!(err.to_string(), "line 3: unresolved symbol `missing`");

    let err = AssembleError::UnknownMnemonic {
        mnemonic: "JMP".to_string(),
        line: 1,
    };
    assert_eq!(err.to_string(), "line 1: unknown mnemonic `JMP`");
}

#[test]
fn test_fault_display() {
    assert_eq!(Fault::UnknownOpcode(13).to_string(), "unknown opcode 13");
    assert_eq!(
        Fault::DeviceIndexOutOfRange {
            index: 2,
            devices: 1
        }
        .to_string(),
        "device index 2 out of range (1 registered)"
    );
    assert_eq!(
        Fault::MemoryOutOfBounds {
            address: 40,
            memory_size: 10
        }
        .to_string(),
        "memory address 40 out of range (memory holds 10 words)"
    );
}

#[test]
fn test_umbrella_error_is_transparent() {
    let err: LmcError = ConfigError::InvalidMemorySize.into();
    assert_eq!(err.to_string(), "memory size must be non-zero");

    let err: LmcError = Fault::InputExhausted.into();
    assert_eq!(err.to_string(), "input exhausted");
}

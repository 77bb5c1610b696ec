//! # Opcode Table Tests

use lmc_core::common::UnknownMnemonic;
use lmc_core::io::ScriptedConsole;
use lmc_core::isa::{DEFAULT_INSTRUCTIONS, OpcodeTable, opcodes};
use lmc_core::soc::DeviceRegistry;
use lmc_core::{Cpu, Fault};
use pretty_assertions::assert_eq;

fn cpu() -> Cpu {
    Cpu::new(
        16,
        Box::new(ScriptedConsole::new(Vec::<String>::new())),
        DeviceRegistry::new(),
        None,
    )
}

#[test]
fn test_default_table_has_eleven_entries() {
    let table = OpcodeTable::with_defaults();
    let expected = [
        ("HLT", 0),
        ("ADD", 1),
        ("SUB", 2),
        ("STA", 3),
        ("DAT", 4),
        ("LDA", 5),
        ("BRA", 6),
        ("BRZ", 7),
        ("BRP", 8),
        ("OUT", 9),
        ("INP", 10),
    ];
    for (name, opcode) in expected {
        assert_eq!(table.get_opcode(name), Ok(opcode), "{name}");
        assert!(table.handler(opcode).is_some(), "{name} has no handler");
    }
    assert_eq!(table.handler_count(), 11);
    assert_eq!(DEFAULT_INSTRUCTIONS.len(), 11);
    assert!(!table.contains_mnemonic("WRT"));
}

#[test]
fn test_device_io_adds_wrt() {
    let table = OpcodeTable::with_device_io();
    assert_eq!(table.get_opcode("WRT"), Ok(opcodes::WRT));
    assert_eq!(table.handler_count(), 12);
}

#[test]
fn test_unknown_mnemonic() {
    let table = OpcodeTable::with_defaults();
    assert_eq!(
        table.get_opcode("JMP"),
        Err(UnknownMnemonic("JMP".to_string()))
    );
    assert!(OpcodeTable::new().get_opcode("HLT").is_err());
}

#[test]
fn test_register_mnemonic_last_write_wins() {
    let mut table = OpcodeTable::with_defaults();
    table.register_mnemonic("ADD", 12);
    assert_eq!(table.get_opcode("ADD"), Ok(12));
}

#[test]
fn test_reverse_lookup() {
    let table = OpcodeTable::with_defaults();
    assert_eq!(table.mnemonic(opcodes::LDA), Some("LDA"));
    assert_eq!(table.mnemonic(11), None);
}

#[test]
fn test_dispatch_unknown_opcode_faults() {
    let table = OpcodeTable::with_defaults();
    let mut cpu = cpu();
    assert_eq!(
        table.dispatch(&mut cpu, 14, 3),
        Err(Fault::UnknownOpcode(14))
    );
}

#[test]
fn test_registered_closure_handler_runs() {
    let mut table = OpcodeTable::with_defaults();
    table.register("DBL", 12, |cpu: &mut Cpu, _operand| {
        cpu.acc *= 2;
        Ok(())
    });
    let mut cpu = cpu();
    cpu.acc = 21;
    table.dispatch(&mut cpu, 12, 0).unwrap();
    assert_eq!(cpu.acc, 42);
    assert_eq!(table.get_opcode("DBL"), Ok(12));
}

#[test]
fn test_dat_handler_is_noop() {
    let table = OpcodeTable::with_defaults();
    let mut cpu = cpu();
    cpu.acc = 9;
    table.dispatch(&mut cpu, opcodes::DAT, 3).unwrap();
    assert_eq!(cpu.acc, 9);
    assert!(cpu.memory().iter().all(|&w| w == 0));
    assert!(!cpu.halted);
}

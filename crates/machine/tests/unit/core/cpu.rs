//! # Cpu State Tests

use lmc_core::io::ScriptedConsole;
use lmc_core::soc::DeviceRegistry;
use lmc_core::{Cpu, Fault};

fn cpu_with_input(lines: &[&str], retries: Option<u32>) -> Cpu {
    Cpu::new(
        8,
        Box::new(ScriptedConsole::new(lines.iter().copied())),
        DeviceRegistry::new(),
        retries,
    )
}

#[test]
fn test_read_write_bounds() {
    let mut cpu = cpu_with_input(&[], None);
    cpu.write(7, -12).unwrap();
    assert_eq!(cpu.read(7), Ok(-12));
    assert_eq!(
        cpu.read(8),
        Err(Fault::MemoryOutOfBounds {
            address: 8,
            memory_size: 8
        })
    );
    assert_eq!(
        cpu.write(-1, 0),
        Err(Fault::MemoryOutOfBounds {
            address: -1,
            memory_size: 8
        })
    );
}

#[test]
fn test_load_is_all_or_nothing() {
    let mut cpu = cpu_with_input(&[], None);
    assert!(cpu.load(6, &[1, 2, 3]).is_err());
    assert!(cpu.memory().iter().all(|&w| w == 0));

    cpu.load(5, &[1, 2, 3]).unwrap();
    assert_eq!(&cpu.memory()[5..], &[1, 2, 3]);
}

#[test]
fn test_read_input_retries_until_integer() {
    let mut cpu = cpu_with_input(&["abc", "", "4.5", "  -17 "], None);
    assert_eq!(cpu.read_input(), Ok(-17));
}

#[test]
fn test_read_input_exhausted() {
    let mut cpu = cpu_with_input(&["nope"], None);
    assert_eq!(cpu.read_input(), Err(Fault::InputExhausted));
}

#[test]
fn test_read_input_retry_bound() {
    let mut cpu = cpu_with_input(&["x", "y", "3"], Some(1));
    assert_eq!(
        cpu.read_input(),
        Err(Fault::InvalidInput {
            text: "y".to_string()
        })
    );

    let mut cpu = cpu_with_input(&["x", "3"], Some(1));
    assert_eq!(cpu.read_input(), Ok(3));
}

#[test]
fn test_jump_sets_pc() {
    let mut cpu = cpu_with_input(&[], None);
    cpu.jump(5);
    assert_eq!(cpu.pc, 5);
}

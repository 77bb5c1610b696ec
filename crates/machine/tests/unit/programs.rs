//! # End-to-End Programs
//!
//! Assembles the sample programs shipped under `programs/` and a few
//! inline ones, then runs them to completion.

use crate::common::harness::TestContext;
use crate::common::mocks::device::RecordingDevice;
use lmc_core::soc::Device;
use lmc_core::{Fault, MachineConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ADD: &str = include_str!("../../../../programs/add.lmc");
const COUNTDOWN: &str = include_str!("../../../../programs/countdown.lmc");
const HELLO_DEVICE: &str = include_str!("../../../../programs/hello_device.lmc");

#[test]
fn test_add_program() {
    let mut ctx = TestContext::new().load(ADD);
    assert!(ctx.run().is_halted());
    assert_eq!(ctx.output(), "@");
    assert_eq!(ctx.acc(), 64);
}

#[rstest]
#[case("3", "3210")]
#[case("0", "0")]
#[case("9", "9876543210")]
fn test_countdown(#[case] start: &str, #[case] expected: &str) {
    let mut ctx = TestContext::with_input(&[start]).load(COUNTDOWN);
    assert!(ctx.run().is_halted());
    assert_eq!(ctx.output(), expected);
}

#[test]
fn test_countdown_retries_bad_input() {
    let mut ctx = TestContext::with_input(&["three", "  2 "]).load(COUNTDOWN);
    assert!(ctx.run().is_halted());
    assert_eq!(ctx.output(), "210");
}

#[test]
fn test_countdown_without_input_faults() {
    let mut ctx = TestContext::with_input(&[]).load(COUNTDOWN);
    let outcome = ctx.run();
    let report = outcome.fault().unwrap();
    assert_eq!(report.fault, Fault::InputExhausted);
    assert_eq!(report.pc, 0);
}

#[test]
fn test_hello_device() {
    let recorder = RecordingDevice::new();
    let config = MachineConfig {
        device_io: true,
        ..MachineConfig::default()
    };
    let devices: Vec<Box<dyn Device>> = vec![Box::new(recorder.clone())];
    let mut ctx = TestContext::build(config, &[], devices).load(HELLO_DEVICE);

    assert!(ctx.run().is_halted());
    assert_eq!(recorder.values(), vec![104, 105]);
    assert_eq!(ctx.output(), "");
}

#[test]
fn test_hello_device_needs_device_io() {
    let mut ctx = TestContext::new();
    assert!(ctx.machine.assemble(HELLO_DEVICE).is_err());
}

#[test]
fn test_forward_references_and_loop() {
    // Sums 1..=5 into `total` using labels that are defined after use.
    let source = "
        loop  LDA total
              ADD n
              STA total
              LDA n
              SUB one
              STA n
              BRZ done
              BRA loop
        done  LDA total
              HLT
        total DAT 0
        n     DAT 5
        one   DAT 1
    ";
    let mut ctx = TestContext::new().load(source);
    assert!(ctx.run().is_halted());
    assert_eq!(ctx.acc(), 15);
}

#[test]
fn test_program_at_load_address() {
    let config = MachineConfig {
        load_address: 50,
        ..MachineConfig::default()
    };
    let mut ctx = TestContext::with_config(config);
    let image = ctx.load_image("LDA x\nOUT\nHLT\nx DAT 33");
    assert_eq!(image.base, 50);
    assert_eq!(image.symbol("x"), Some(53));

    assert!(ctx.machine.run(50).is_halted());
    assert_eq!(ctx.output(), "!");
    assert_eq!(ctx.memory()[..50], [0; 50]);
}

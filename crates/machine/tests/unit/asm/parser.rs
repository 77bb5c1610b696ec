//! # Parser Tests
//!
//! Line shapes are decided by token count and whether the first token is a
//! registered mnemonic.

use lmc_core::AssembleError;
use lmc_core::asm::{Statement, parse};
use lmc_core::isa::OpcodeTable;
use pretty_assertions::assert_eq;

fn statements(source: &str) -> Vec<Statement<'_>> {
    let table = OpcodeTable::with_defaults();
    parse(source, &table)
        .unwrap()
        .into_iter()
        .map(|line| line.statement)
        .collect()
}

#[test]
fn test_all_line_shapes() {
    let source = "HLT\nLDA x\nx DAT\nstart OUT\ny DAT 7\nloop BRA start\n";
    assert_eq!(
        statements(source),
        vec![
            Statement::Instruction {
                label: None,
                mnemonic: "HLT",
                operand: None
            },
            Statement::Instruction {
                label: None,
                mnemonic: "LDA",
                operand: Some("x")
            },
            Statement::Data {
                label: "x",
                value: None
            },
            Statement::Instruction {
                label: Some("start"),
                mnemonic: "OUT",
                operand: None
            },
            Statement::Data {
                label: "y",
                value: Some("7")
            },
            Statement::Instruction {
                label: Some("loop"),
                mnemonic: "BRA",
                operand: Some("start")
            },
        ]
    );
}

#[test]
fn test_blank_lines_and_whitespace_ignored() {
    let table = OpcodeTable::with_defaults();
    let lines = parse("\n   \n\tLDA   5  \n\n  HLT\n", &table).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].number, 3);
    assert_eq!(lines[1].number, 5);
}

#[test]
fn test_too_many_tokens() {
    let table = OpcodeTable::with_defaults();
    assert_eq!(
        parse("HLT\na LDA b c", &table),
        Err(AssembleError::MalformedLine { line: 2, tokens: 4 })
    );
}

#[test]
fn test_two_tokens_with_unknown_first_token_is_labelled_instruction() {
    assert_eq!(
        statements("done HLT"),
        vec![Statement::Instruction {
            label: Some("done"),
            mnemonic: "HLT",
            operand: None
        }]
    );
}

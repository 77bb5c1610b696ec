//! Assembly source handling.
//!
//! This module translates line-oriented mnemonic source into a memory image.
//! It provides:
//! 1. **Parsing:** Whitespace tokenization and classification of each line's shape.
//! 2. **Assembly:** Label layout for data and jump targets, then operand resolution and packing.
//!
//! # Syntax
//!
//! ```text
//! [label] MNEMONIC [operand]
//! label DAT [value]
//! ```
//!
//! Operands are decimal integers or labels. There is no comment syntax.

/// Two-pass assembler producing an [`Image`].
pub mod assembler;

/// Line tokenizer and statement classification.
pub mod parser;

pub use assembler::{Assembler, Image};
pub use parser::{Line, Statement, parse};

//! Word type and field layout.
//!
//! A word packs an opcode into its high bits and an operand into its low
//! `operand_bits` bits. Memory cells are signed so that `STA` can store a
//! negative accumulator; decoding uses an arithmetic shift, so such a cell
//! decodes to a negative opcode that no handler claims.

/// A single memory cell.
pub type Word = i64;

/// A word split into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// High field; selects the handler.
    pub opcode: Word,
    /// Low field; usually a memory address.
    pub operand: Word,
}

/// Bit widths of the opcode and operand fields of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLayout {
    /// Width of the opcode field.
    pub opcode_bits: u32,
    /// Width of the operand field.
    pub operand_bits: u32,
}

impl WordLayout {
    /// Creates a layout from explicit field widths.
    pub const fn new(opcode_bits: u32, operand_bits: u32) -> Self {
        Self {
            opcode_bits,
            operand_bits,
        }
    }

    /// Mask selecting the operand field.
    #[inline]
    pub const fn operand_mask(&self) -> Word {
        (1 << self.operand_bits) - 1
    }

    /// Total word width in bits.
    #[inline]
    pub const fn word_bits(&self) -> u32 {
        self.opcode_bits.saturating_add(self.operand_bits)
    }

    /// Largest opcode that fits the opcode field.
    #[inline]
    pub const fn max_opcode(&self) -> Word {
        (1 << self.opcode_bits) - 1
    }

    /// Largest operand that fits the operand field.
    #[inline]
    pub const fn max_operand(&self) -> Word {
        self.operand_mask()
    }

    /// Packs an opcode and operand into a word: `(opcode << operand_bits) + operand`.
    ///
    /// No range check is made here; the assembler rejects values that do not fit.
    #[inline]
    pub const fn encode(&self, opcode: Word, operand: Word) -> Word {
        (opcode << self.operand_bits) + operand
    }

    /// Splits a word into its fields: `opcode = word >> operand_bits`,
    /// `operand = word & mask`.
    #[inline]
    pub const fn decode(&self, word: Word) -> Decoded {
        Decoded {
            opcode: word >> self.operand_bits,
            operand: word & self.operand_mask(),
        }
    }

    /// Returns `true` if `operand` fits the operand field.
    #[inline]
    pub const fn operand_fits(&self, operand: Word) -> bool {
        operand >= 0 && operand <= self.max_operand()
    }

    /// Returns `true` if `opcode` fits the opcode field.
    #[inline]
    pub const fn opcode_fits(&self, opcode: Word) -> bool {
        opcode >= 0 && opcode <= self.max_opcode()
    }
}

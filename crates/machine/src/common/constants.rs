//! Machine-wide constants.

/// Default width of the opcode field in bits.
pub const DEFAULT_OPCODE_BITS: u32 = 4;

/// Legacy word width the default operand width is derived from.
///
/// Equal to the bit length of `2^8`; the default operand width is this value
/// minus the opcode width.
pub const LEGACY_WORD_BITS: u32 = (1u32 << 8).ilog2() + 1;

/// Widest word (opcode + operand) the machine can represent in an `i64`
/// while leaving room for the sign bit and signed arithmetic headroom.
pub const MAX_WORD_BITS: u32 = 62;

/// Default memory size in words.
pub const DEFAULT_MEMORY_SIZE: usize = 200;

/// Prompt printed by the standard console before reading `INP` input.
pub const INPUT_PROMPT: &str = "-> ";

//! Device trait for `WRT` targets.
//!
//! A device is a sink with one operation: receive a value. Writes are
//! synchronous and expected not to block; a failed write surfaces as a
//! run-time fault.

use std::io;

use crate::common::word::Word;

/// Output sink addressed by position from the `WRT` opcode.
pub trait Device: Send {
    /// Returns a short name for diagnostics (e.g. `"char-file"`).
    fn name(&self) -> &str;

    /// Receives the accumulator value.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the device cannot accept the value.
    fn write(&mut self, value: Word) -> io::Result<()>;
}

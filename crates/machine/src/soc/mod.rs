//! External devices addressable from the instruction set.
//!
//! This module provides:
//! 1. **Device Trait:** The single-operation sink contract.
//! 2. **Registry:** An ordered, append-only device list indexed by the `WRT` operand.
//! 3. **Devices:** A concrete character-file device.

/// Device implementations and the device registry.
pub mod devices;

/// Device trait.
pub mod traits;

pub use devices::DeviceRegistry;
pub use traits::Device;

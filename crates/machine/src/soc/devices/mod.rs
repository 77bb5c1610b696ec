//! Output devices and the registry the `WRT` opcode dispatches through.

/// Device writing each value as a UTF-8 character to a file.
pub mod char_file;

pub use char_file::CharFileDevice;

pub use crate::soc::traits::Device;

use std::fmt;

use crate::common::error::Fault;
use crate::common::word::Word;

/// Ordered, append-only list of devices.
///
/// Indices are assigned in registration order and never change.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: Vec<Box<dyn Device>>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a device and returns its index.
    pub fn register(&mut self, device: Box<dyn Device>) -> usize {
        self.devices.push(device);
        self.devices.len() - 1
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if no device is registered.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Looks up a device by index.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::DeviceIndexOutOfRange`] if `index` is negative or past the end.
    pub fn get_device(&mut self, index: Word) -> Result<&mut dyn Device, Fault> {
        let devices = self.devices.len();
        match usize::try_from(index).ok().and_then(|i| self.devices.get_mut(i)) {
            Some(device) => Ok(device.as_mut()),
            None => Err(Fault::DeviceIndexOutOfRange { index, devices }),
        }
    }

    /// Delivers `value` to the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::DeviceIndexOutOfRange`] for a bad index, or
    /// [`Fault::DeviceFailure`] if the device rejects the write.
    pub fn write(&mut self, index: Word, value: Word) -> Result<(), Fault> {
        let device = self.get_device(index)?;
        tracing::debug!(index, device = device.name(), value, "device write");
        device.write(value).map_err(|e| Fault::DeviceFailure {
            index: index as usize,
            message: e.to_string(),
        })
    }

    /// Device names in index order.
    pub fn names(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.name()).collect()
    }
}

impl fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

//! Character file device.
//!
//! Each write appends the UTF-8 encoding of the character whose code point
//! is the written value. The file is created, or truncated, when the device
//! is opened.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::common::word::Word;
use crate::soc::traits::Device;

/// Device writing characters to a file.
#[derive(Debug)]
pub struct CharFileDevice {
    path: PathBuf,
    file: File,
}

impl CharFileDevice {
    /// Opens `path` for writing, truncating any existing contents.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self { path, file })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Device for CharFileDevice {
    fn name(&self) -> &str {
        "char-file"
    }

    fn write(&mut self, value: Word) -> io::Result<()> {
        let ch = u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{value} is not a character"),
                )
            })?;
        let mut buf = [0u8; 4];
        self.file.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        self.file.flush()
    }
}

use std::fs;
use std::path::Path;

use crate::consts;
use crate::error::{Error, Result};

/// A program image that is known to fit above the reserved area.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rom {
    pub buffer: Vec<u8>,
}

impl Rom {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        log::debug!("read {} bytes from {}", bytes.len(), path.as_ref().display());
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let buffer = bytes.into();
        check_size(buffer.len())?;
        Ok(Rom { buffer })
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

pub(crate) fn check_size(size: usize) -> Result<()> {
    if size > consts::MAX_ROM_BYTES {
        return Err(Error::ProgramTooLarge {
            size,
            excess: size - consts::MAX_ROM_BYTES,
        });
    }
    Ok(())
}

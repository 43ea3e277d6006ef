use crate::consts;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Ram {
    pub buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        Ram {
            buffer: [0; consts::RAM_BYTES],
        }
    }
}

impl Ram {
    /// Memory with the hex glyphs baked into the reserved area.
    pub fn with_fonts(fonts: &[u8]) -> Self {
        let mut ram = Ram::default();
        ram.buffer[0..fonts.len()].copy_from_slice(fonts);
        ram
    }

    /// Big-endian word at `addr`.
    pub fn read_word(&self, addr: u16, pc: u16) -> Result<u16> {
        let bytes = self.slice(addr as usize, consts::OP_CODE_BYTES, pc)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn slice(&self, addr: usize, len: usize, pc: u16) -> Result<&[u8]> {
        Self::check(addr, len, pc)?;
        Ok(&self.buffer[addr..addr + len])
    }

    pub fn slice_mut(&mut self, addr: usize, len: usize, pc: u16) -> Result<&mut [u8]> {
        Self::check(addr, len, pc)?;
        Ok(&mut self.buffer[addr..addr + len])
    }

    fn check(addr: usize, len: usize, pc: u16) -> Result<()> {
        if addr + len > consts::RAM_BYTES {
            // report the first byte that falls outside
            let addr = addr.max(consts::RAM_BYTES);
            return Err(Error::AddressOutOfRange { addr, pc });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    pub buffer: [[u8; consts::CHIP8_WIDTH]; consts::CHIP8_HEIGHT],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        DisplayBuffer {
            buffer: [[0; consts::CHIP8_WIDTH]; consts::CHIP8_HEIGHT],
        }
    }
}

impl DisplayBuffer {
    pub fn clear(&mut self) {
        self.buffer
            .iter_mut()
            .for_each(|row| *row = [0; consts::CHIP8_WIDTH]);
    }

    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.buffer[row][col]
    }

    pub fn lit_count(&self) -> usize {
        self.buffer.iter().flatten().filter(|&&px| px == 1).count()
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardBuffer {
    pub buffer: [bool; consts::KEYBOARD_SIZE],
}

impl KeyboardBuffer {
    /// `None` for indices past the keypad.
    pub fn is_pressed(&self, key: u8) -> Option<bool> {
        self.buffer.get(key as usize).copied()
    }

    /// Lowest pressed key index.
    pub fn first_pressed(&self) -> Option<u8> {
        self.buffer.iter().position(|&pressed| pressed).map(|i| i as u8)
    }
}

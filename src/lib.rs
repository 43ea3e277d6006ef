//! A CHIP-8 interpreter core.
//!
//! [`Processor`] owns the whole machine: 4K of memory with the hex glyphs
//! preloaded, sixteen registers, the call stack, both timers, a 64x32
//! monochrome framebuffer and the 16-key keypad state. A host loads a
//! program, refreshes the keypad, and calls [`Processor::cycle`] at a fixed
//! rate; the timers decay once per cycle, so the host's cadence is the
//! timer frequency.
//!
//! ```
//! use chippy::{CycleStatus, Processor};
//!
//! let mut chip8 = Processor::with_seed(1);
//! // V0 = 0x0A; I = glyph(V0); draw 5 rows at (V0, V0)
//! chip8.load_program(&[0x60, 0x0A, 0xF0, 0x29, 0xD0, 0x05]).unwrap();
//! chip8.cycle().unwrap();
//! chip8.cycle().unwrap();
//! assert_eq!(chip8.cycle().unwrap(), CycleStatus::RedrawScreen);
//! assert!(chip8.display().lit_count() > 0);
//! ```

pub mod consts;
pub mod core;
pub mod error;
mod utils;

pub use crate::core::instruction::Instruction;
pub use crate::core::processor::{CycleStatus, Processor};
pub use crate::core::ram::{DisplayBuffer, KeyboardBuffer};
pub use crate::core::rom::Rom;
pub use crate::error::{Error, Result};

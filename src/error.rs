use std::io;

/// Everything that can stop the interpreter.
///
/// Load-time problems are reported before any memory is written. Runtime
/// faults are reported by [`Processor::cycle`](crate::core::processor::Processor::cycle)
/// and leave the machine exactly as it was before the faulting cycle.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("the program is {size} bytes, {excess} bytes too big")]
    ProgramTooLarge { size: usize, excess: usize },

    #[error("call at {pc:#05x} with a full stack")]
    StackOverflow { pc: u16 },

    #[error("return at {pc:#05x} with an empty stack")]
    StackUnderflow { pc: u16 },

    #[error("address {addr:#06x} out of range at {pc:#05x}")]
    AddressOutOfRange { addr: usize, pc: u16 },

    #[error("key {key:#04x} does not exist (at {pc:#05x})")]
    InvalidKey { key: u8, pc: u16 },

    #[error("could not read rom")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::utils;

/// A decoded opcode with its operands pulled out.
///
/// Register operands are indices 0-15, `byte` is the low 8 bits, `addr` the
/// low 12 bits and `n` the low nibble of the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    ClearScreen,
    Return,
    Jump { addr: u16 },
    Call { addr: u16 },
    SkipIfEqualByte { x: u8, byte: u8 },
    SkipIfNotEqualByte { x: u8, byte: u8 },
    SkipIfEqual { x: u8, y: u8 },
    SkipIfNotEqual { x: u8, y: u8 },
    LoadByte { x: u8, byte: u8 },
    AddByte { x: u8, byte: u8 },
    Move { x: u8, y: u8 },
    Or { x: u8, y: u8 },
    And { x: u8, y: u8 },
    Xor { x: u8, y: u8 },
    AddWithCarry { x: u8, y: u8 },
    Sub { x: u8, y: u8 },
    SubReverse { x: u8, y: u8 },
    ShiftRight { x: u8 },
    ShiftLeft { x: u8 },
    SetIndex { addr: u16 },
    JumpWithOffset { addr: u16 },
    Random { x: u8, mask: u8 },
    Draw { x: u8, y: u8, n: u8 },
    SkipIfPressed { x: u8 },
    SkipIfNotPressed { x: u8 },
    GetDelay { x: u8 },
    WaitForKey { x: u8 },
    SetDelay { x: u8 },
    SetSound { x: u8 },
    AddToIndex { x: u8 },
    FontCharacter { x: u8 },
    StoreBcd { x: u8 },
    DumpRegisters { x: u8 },
    LoadRegisters { x: u8 },
    /// Anything without a defined behaviour. Executes as a no-op.
    Unknown(u16),
}

impl Instruction {
    pub fn decode(opcode: u16) -> Self {
        let (family, x, y, n) = utils::nibble_split(opcode);
        let byte = (opcode & 0x00FF) as u8;
        let addr = opcode & 0x0FFF;

        match (family, n) {
            (0x0, 0x0) => Self::ClearScreen,
            (0x0, 0xE) => Self::Return,
            (0x1, _) => Self::Jump { addr },
            (0x2, _) => Self::Call { addr },
            (0x3, _) => Self::SkipIfEqualByte { x, byte },
            (0x4, _) => Self::SkipIfNotEqualByte { x, byte },
            (0x5, _) => Self::SkipIfEqual { x, y },
            (0x6, _) => Self::LoadByte { x, byte },
            (0x7, _) => Self::AddByte { x, byte },
            (0x8, 0x0) => Self::Move { x, y },
            (0x8, 0x1) => Self::Or { x, y },
            (0x8, 0x2) => Self::And { x, y },
            (0x8, 0x3) => Self::Xor { x, y },
            (0x8, 0x4) => Self::AddWithCarry { x, y },
            (0x8, 0x5) => Self::Sub { x, y },
            (0x8, 0x6) => Self::ShiftRight { x },
            (0x8, 0x7) => Self::SubReverse { x, y },
            (0x8, 0xE) => Self::ShiftLeft { x },
            (0x9, _) => Self::SkipIfNotEqual { x, y },
            (0xA, _) => Self::SetIndex { addr },
            (0xB, _) => Self::JumpWithOffset { addr },
            (0xC, _) => Self::Random { x, mask: byte },
            (0xD, _) => Self::Draw { x, y, n },
            (0xE, 0xE) => Self::SkipIfPressed { x },
            (0xE, 0x1) => Self::SkipIfNotPressed { x },
            (0xF, _) => match byte {
                0x07 => Self::GetDelay { x },
                0x0A => Self::WaitForKey { x },
                0x15 => Self::SetDelay { x },
                0x18 => Self::SetSound { x },
                0x1E => Self::AddToIndex { x },
                0x29 => Self::FontCharacter { x },
                0x33 => Self::StoreBcd { x },
                0x55 => Self::DumpRegisters { x },
                0x65 => Self::LoadRegisters { x },
                _ => Self::Unknown(opcode),
            },
            _ => Self::Unknown(opcode),
        }
    }
}

/// Splits an opcode into its four nibbles, most significant first.
pub fn nibble_split(opcode: u16) -> (u8, u8, u8, u8) {
    (
        ((opcode & 0xF000) >> 12) as u8,
        ((opcode & 0x0F00) >> 8) as u8,
        ((opcode & 0x00F0) >> 4) as u8,
        (opcode & 0x000F) as u8,
    )
}

pub fn bounds_check(x: usize, y: usize, width: usize, height: usize) -> bool {
    x < width && y < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_split() {
        assert_eq!(nibble_split(0xD12F), (0xD, 0x1, 0x2, 0xF));
        assert_eq!(nibble_split(0x00E0), (0x0, 0x0, 0xE, 0x0));
    }

    #[test]
    fn test_bounds_check() {
        assert!(bounds_check(63, 31, 64, 32));
        assert!(!bounds_check(64, 0, 64, 32));
        assert!(!bounds_check(0, 32, 64, 32));
    }
}

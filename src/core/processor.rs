use crate::consts;
use crate::core::instruction::Instruction;
use crate::core::ram::{DisplayBuffer, KeyboardBuffer, Ram};
use crate::core::rom::{self, Rom};
use crate::error::{Error, Result};
use crate::utils;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    RedrawScreen,
    Continue,
    Waiting,
}

#[derive(Debug)]
pub struct Processor {
    pub stack: [u16; consts::STACK_SIZE],
    pub registers: [u8; consts::REG_COUNT],
    pub idx_register: u16,
    pub pc: u16,
    pub stack_pointer: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub ram: Ram,
    pub display_buffer: DisplayBuffer,
    pub keyboard_buffer: KeyboardBuffer,
    rng: StdRng,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A processor whose random instruction yields a reproducible sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Processor {
            stack: [0; consts::STACK_SIZE],
            registers: [0; consts::REG_COUNT],
            idx_register: 0,
            pc: consts::PROG_OFFSET as u16,
            stack_pointer: 0,
            delay_timer: 0,
            sound_timer: 0,
            ram: Ram::with_fonts(&consts::FONT_SET),
            display_buffer: DisplayBuffer::default(),
            keyboard_buffer: KeyboardBuffer::default(),
            rng,
        }
    }

    /// Copies `program` to 0x200 and points the program counter at it.
    ///
    /// Nothing is written when the program does not fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        rom::check_size(program.len())?;
        self.ram.buffer[consts::PROG_OFFSET..consts::PROG_OFFSET + program.len()]
            .copy_from_slice(program);
        self.pc = consts::PROG_OFFSET as u16;
        log::debug!("loaded {} byte program", program.len());
        Ok(())
    }

    pub fn load_rom(&mut self, rom: &Rom) -> Result<()> {
        self.load_program(&rom.buffer)
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display_buffer
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn set_keys(&mut self, keys: [bool; consts::KEYBOARD_SIZE]) {
        self.keyboard_buffer.buffer = keys;
    }

    pub fn set_key(&mut self, key: usize, pressed: bool) {
        if let Some(slot) = self.keyboard_buffer.buffer.get_mut(key) {
            *slot = pressed;
        }
    }

    /// Fetch, decode and execute one instruction, then decay the timers.
    ///
    /// On error the processor is left as it was before the call, with the
    /// program counter on the faulting instruction.
    pub fn cycle(&mut self) -> Result<CycleStatus> {
        let pc = self.pc;
        let opcode = self.ram.read_word(pc, pc)?;
        self.pc = pc.wrapping_add(consts::OP_CODE_BYTES as u16);

        let status = match self.execute(Instruction::decode(opcode), pc) {
            Ok(status) => status,
            Err(err) => {
                self.pc = pc;
                log::warn!("{err} (opcode {opcode:#06x})");
                return Err(err);
            }
        };

        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
        Ok(status)
    }

    /// Applies a single decoded instruction. `pc` is the address it was
    /// fetched from and is only used for error reports.
    ///
    /// Every fallible instruction validates before it mutates anything.
    fn execute(&mut self, instruction: Instruction, pc: u16) -> Result<CycleStatus> {
        match instruction {
            Instruction::ClearScreen => {
                self.display_buffer.clear();
                return Ok(CycleStatus::RedrawScreen);
            }

            Instruction::Draw { x, y, n } => {
                self.draw_sprite(x, y, n, pc)?;
                return Ok(CycleStatus::RedrawScreen);
            }

            // Jumps
            Instruction::Jump { addr } => {
                self.pc = addr;
            }
            Instruction::JumpWithOffset { addr } => {
                self.pc = addr.wrapping_add(self.registers[0] as u16);
            }

            // Subroutines: enter and exit
            Instruction::Return => {
                if self.stack_pointer == 0 {
                    return Err(Error::StackUnderflow { pc });
                }
                self.stack_pointer -= 1;
                self.pc = self.stack[self.stack_pointer as usize];
            }
            Instruction::Call { addr } => {
                if self.stack_pointer as usize >= consts::STACK_SIZE {
                    return Err(Error::StackOverflow { pc });
                }
                self.stack[self.stack_pointer as usize] = self.pc;
                self.stack_pointer += 1;
                self.pc = addr;
            }

            // Conditional skips
            Instruction::SkipIfEqualByte { x, byte } => {
                self.skip_if(self.registers[x as usize] == byte);
            }
            Instruction::SkipIfNotEqualByte { x, byte } => {
                self.skip_if(self.registers[x as usize] != byte);
            }
            Instruction::SkipIfEqual { x, y } => {
                self.skip_if(self.registers[x as usize] == self.registers[y as usize]);
            }
            Instruction::SkipIfNotEqual { x, y } => {
                self.skip_if(self.registers[x as usize] != self.registers[y as usize]);
            }

            Instruction::LoadByte { x, byte } => {
                self.registers[x as usize] = byte;
            }
            Instruction::Move { x, y } => {
                self.registers[x as usize] = self.registers[y as usize];
            }
            Instruction::SetIndex { addr } => {
                self.idx_register = addr;
            }

            // Arithmetic; add writes VF after the result, subtract before it
            Instruction::AddByte { x, byte } => {
                self.registers[x as usize] = self.registers[x as usize].wrapping_add(byte);
            }
            Instruction::AddWithCarry { x, y } => {
                let sum = self.registers[x as usize] as u16 + self.registers[y as usize] as u16;
                self.registers[x as usize] = (sum & 0x00FF) as u8;
                self.registers[consts::FLAG_REGISTER] = (sum > 0xFF) as u8;
            }
            Instruction::Sub { x, y } => {
                let (vx, vy) = (self.registers[x as usize], self.registers[y as usize]);
                self.registers[consts::FLAG_REGISTER] = (vx > vy) as u8;
                self.registers[x as usize] = vx.wrapping_sub(vy);
            }
            Instruction::SubReverse { x, y } => {
                let (vx, vy) = (self.registers[x as usize], self.registers[y as usize]);
                self.registers[consts::FLAG_REGISTER] = (vy > vx) as u8;
                self.registers[x as usize] = vy.wrapping_sub(vx);
            }

            Instruction::Or { x, y } => {
                self.registers[x as usize] |= self.registers[y as usize];
            }
            Instruction::And { x, y } => {
                self.registers[x as usize] &= self.registers[y as usize];
            }
            Instruction::Xor { x, y } => {
                self.registers[x as usize] ^= self.registers[y as usize];
            }

            // Shifts set VF before the result; VY is never read
            Instruction::ShiftRight { x } => {
                let vx = self.registers[x as usize];
                self.registers[consts::FLAG_REGISTER] = vx & 0b00000001;
                self.registers[x as usize] = vx >> 1;
            }
            Instruction::ShiftLeft { x } => {
                let vx = self.registers[x as usize];
                self.registers[consts::FLAG_REGISTER] = (vx & 0b10000000) >> 7;
                self.registers[x as usize] = vx << 1;
            }

            Instruction::Random { x, mask } => {
                let rand_val: u8 = self.rng.gen();
                self.registers[x as usize] = mask & rand_val;
            }

            // Keypad
            Instruction::SkipIfPressed { x } => {
                let pressed = self.key_state(x, pc)?;
                self.skip_if(pressed);
            }
            Instruction::SkipIfNotPressed { x } => {
                let pressed = self.key_state(x, pc)?;
                self.skip_if(!pressed);
            }

            Instruction::WaitForKey { x } => match self.keyboard_buffer.first_pressed() {
                Some(key) => self.registers[x as usize] = key,
                None => {
                    self.pc = self.pc.wrapping_sub(consts::OP_CODE_BYTES as u16);
                    return Ok(CycleStatus::Waiting);
                }
            },

            // Timers
            Instruction::GetDelay { x } => {
                self.registers[x as usize] = self.delay_timer;
            }
            Instruction::SetDelay { x } => {
                self.delay_timer = self.registers[x as usize];
            }
            Instruction::SetSound { x } => {
                self.sound_timer = self.registers[x as usize];
            }

            // Index register
            Instruction::AddToIndex { x } => {
                self.idx_register = self
                    .idx_register
                    .wrapping_add(self.registers[x as usize] as u16);
            }
            Instruction::FontCharacter { x } => {
                self.idx_register =
                    self.registers[x as usize] as u16 * consts::FONT_GLYPH_BYTES as u16;
            }

            Instruction::StoreBcd { x } => {
                let num = self.registers[x as usize];
                let digits = self.ram.slice_mut(self.idx_register as usize, 3, pc)?;
                digits.copy_from_slice(&[num / 100, (num % 100) / 10, num % 10]);
            }

            Instruction::DumpRegisters { x } => {
                let count = x as usize + 1;
                let dst = self.ram.slice_mut(self.idx_register as usize, count, pc)?;
                dst.copy_from_slice(&self.registers[..count]);
            }
            Instruction::LoadRegisters { x } => {
                let count = x as usize + 1;
                let src = self.ram.slice(self.idx_register as usize, count, pc)?;
                self.registers[..count].copy_from_slice(src);
            }

            Instruction::Unknown(opcode) => {
                log::debug!("ignoring unknown opcode {opcode:#06x} at {pc:#05x}");
            }
        }
        Ok(CycleStatus::Continue)
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(consts::OP_CODE_BYTES as u16);
        }
    }

    fn key_state(&self, x: u8, pc: u16) -> Result<bool> {
        let key = self.registers[x as usize];
        self.keyboard_buffer
            .is_pressed(key)
            .ok_or(Error::InvalidKey { key, pc })
    }

    fn draw_sprite(&mut self, x: u8, y: u8, n: u8, pc: u16) -> Result<()> {
        let x_coord = self.registers[x as usize] as usize % consts::CHIP8_WIDTH;
        let y_coord = self.registers[y as usize] as usize % consts::CHIP8_HEIGHT;
        let sprite_vals = self.ram.slice(self.idx_register as usize, n as usize, pc)?;
        let vram = &mut self.display_buffer.buffer;

        let mut collision = 0;
        for (i, &curr_sprite_val) in sprite_vals.iter().enumerate() {
            for shift_pos in 0..8 {
                let (col, row) = (x_coord + shift_pos, y_coord + i);
                if !utils::bounds_check(col, row, consts::CHIP8_WIDTH, consts::CHIP8_HEIGHT) {
                    break;
                }
                let bit = (curr_sprite_val >> (7 - shift_pos)) & 1;
                if bit == 1 {
                    if vram[row][col] == 1 {
                        collision = 1;
                    }
                    vram[row][col] ^= 1;
                }
            }
        }
        self.registers[consts::FLAG_REGISTER] = collision;
        Ok(())
    }
}

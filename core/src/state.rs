use log::debug;

use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START,
    REGISTER_COUNT, SPRITE_SHEET, STACK_SIZE,
};
use crate::error::{EngineError, LoadError};

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The complete Chip-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register, kept to 12 significant bits
///
/// Counter
/// - (pc) a 16-bit program counter pointing at the next instruction
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per executed step
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - 0x200.. holds the ROM
/// - 32x64 frame buffer, with a flag telling the display it changed
///
/// Only the CPU mutates this; collaborators read it through the accessors.
#[derive(Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
        }
    }

    /// Puts every register, timer, the stack and memory back to power-on values
    pub fn reset(&mut self) {
        *self = State::new();
        debug!("state reset");
    }

    /// Copies a ROM into memory at `PROGRAM_START`
    ///
    /// Fails without touching memory if the ROM is empty or would run past the end of memory.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        if rom.is_empty() {
            return Err(LoadError::Empty);
        }
        if rom.len() > MAX_ROM_SIZE {
            return Err(LoadError::TooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.memory[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), start);
        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> Result<u16, EngineError> {
        let pc = self.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(EngineError::ProgramCounterOutOfBounds { pc: self.pc });
        }
        let left = u16::from(self.memory[pc]);
        let right = u16::from(self.memory[pc + 1]);
        Ok(left << 8 | right)
    }

    /// Reads the byte at `addr`, wrapping at the end of memory
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDRESS_MASK) as usize]
    }

    /// Writes the byte at `addr`, wrapping at the end of memory
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory[(addr & ADDRESS_MASK) as usize] = value;
    }

    /// Decrements both timers, stopping at zero
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn register(&self, x: usize) -> u8 {
        self.v[x]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

use std::io::Read;

use log::{error, trace};

use crate::constants::MAX_ROM_SIZE;
use crate::error::{EngineError, LoadError};
use crate::instruction::Instruction;
use crate::keypad::{first_pressed, KeyState};
use crate::operations::{execute, Step};
use crate::random::{RandomSource, ThreadRandom};
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `pressed_keys` with public interfaces for manipulating them
///  - the first `fault` raised by the CPU, after which it refuses to run
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - inspecting its frame buffer and timers for rendering and sound
///
/// Pacing is up to the caller: each `step` runs exactly one instruction.
pub struct Chip8<R: RandomSource = ThreadRandom> {
    state: State,
    pressed_keys: KeyState,
    rng: R,
    fault: Option<EngineError>,
}

impl Chip8<ThreadRandom> {
    pub fn new() -> Self {
        Self::with_rng(ThreadRandom)
    }
}

impl<R: RandomSource> Chip8<R> {
    /// Builds a Chip-8 whose `CXNN` bytes come from `rng`
    pub fn with_rng(rng: R) -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: KeyState::new(),
            rng,
            fault: None,
        }
    }

    /// Returns to power-on state and clears any fault. Held keys stay held.
    pub fn reset(&mut self) {
        self.state.reset();
        self.fault = None;
    }

    /// Load a rom that is already in memory
    ///
    /// The machine is reset first, so nothing from a previous program survives.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.reset();
        self.state.load(rom)
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        // one byte past the limit is enough to tell that it's too large
        let mut rom = Vec::new();
        reader
            .take(MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        self.load(&rom)
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the logical key 0x0..=0xF that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.pressed_keys.press(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the logical key 0x0..=0xF that was released
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys.release(key);
    }

    /// Advances the CPU by a single instruction
    /// - fetches, decodes and executes the opcode at the pc
    /// - decrements both timers once the instruction has run
    ///
    /// While `FX0A` has no key the pc stays put and `Step::WaitingForKey` is returned;
    /// call again until a key is pressed. Once an error is returned the CPU is faulted
    /// and every later call returns the same error until `reset` or `load`.
    pub fn step(&mut self) -> Result<Step, EngineError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        match self.cycle() {
            Ok(step) => Ok(step),
            Err(err) => {
                error!("halting: {}", err);
                self.fault = Some(err);
                Err(err)
            }
        }
    }

    fn cycle(&mut self) -> Result<Step, EngineError> {
        let pc = self.state.pc;
        let op = self.state.fetch()?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            pc
        );
        let instruction =
            Instruction::decode(op).ok_or(EngineError::UnknownInstruction { opcode: op, pc })?;
        let step = execute(
            instruction,
            &mut self.state,
            &self.pressed_keys,
            &mut self.rng,
        )?;
        if step == Step::Continue {
            self.state.tick_timers();
        }
        Ok(step)
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.state.frame_buffer()
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the draw flag
    pub fn get_frame(&mut self) -> Option<FrameBuffer> {
        if self.consume_redraw_flag() {
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether the frame buffer changed since this was last called
    pub fn consume_redraw_flag(&mut self) -> bool {
        std::mem::replace(&mut self.state.draw_flag, false)
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer()
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer()
    }

    /// Whether the next instruction is an `FX0A` that has no key yet
    ///
    /// A faulted CPU never waits.
    pub fn is_waiting_for_key(&self) -> bool {
        if self.fault.is_some() {
            return false;
        }
        let waiting = matches!(
            self.state.fetch().map(Instruction::decode),
            Ok(Some(Instruction::WaitForKey { .. }))
        );
        waiting && first_pressed(&self.pressed_keys).is_none()
    }

    /// The error that halted the CPU, if any
    pub fn fault(&self) -> Option<EngineError> {
        self.fault
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

//! A Chip-8 virtual machine.
//!
//! [`Chip8`] runs one instruction per [`Chip8::step`]; rendering, input devices and
//! pacing belong to whoever drives it.

pub use chip8::Chip8;
pub use constants::CLOCK_SPEED;
pub use error::{EngineError, LoadError};
pub use instruction::Instruction;
pub use keypad::{KeyState, Keypad};
pub use operations::Step;
pub use random::{FixedRandom, RandomSource, ThreadRandom};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod random;
pub mod state;

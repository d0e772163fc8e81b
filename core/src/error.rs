use std::io;

/// Errors raised while putting a ROM into memory. These are fatal at startup.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("ROM is empty")]
    Empty,
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    TooLarge { size: usize, max: usize },
    #[error("unable to read ROM")]
    Io(#[from] io::Error),
}

/// Errors raised by a single step of the CPU.
///
/// A step that fails has not changed the state; the caller decides whether to halt.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown instruction {opcode:#06X} at pc {pc:#05X}")]
    UnknownInstruction { opcode: u16, pc: u16 },
    #[error("call with a full stack at pc {pc:#05X}")]
    StackOverflow { pc: u16 },
    #[error("return with an empty stack at pc {pc:#05X}")]
    StackUnderflow { pc: u16 },
    #[error("pc {pc:#06X} is outside of memory")]
    ProgramCounterOutOfBounds { pc: u16 },
}

//! Result and errors.
use std::fmt::{self, Display, Formatter};

pub type Chip8Result<T> = std::result::Result<T, Chip8Error>;

#[derive(Debug)]
pub enum Chip8Error {
    /// CALL nested deeper than the call stack allows.
    StackOverflow { pc: usize },
    /// RET executed with an empty call stack.
    StackUnderflow { pc: usize },
    /// Instruction fetch or memory access outside addressable memory.
    OutOfBounds { addr: usize },
    /// Attempt to load a program that can't fit in memory.
    LargeProgram,
    /// Replacement font table has the wrong size.
    Font(String),
}

impl Display for Chip8Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackOverflow { pc } => {
                write!(f, "call stack overflow at {pc:03X}")
            }
            Self::StackUnderflow { pc } => {
                write!(f, "call stack underflow at {pc:03X}")
            }
            Self::OutOfBounds { addr } => {
                write!(f, "memory access out of bounds: {addr:03X}")
            }
            Self::LargeProgram => write!(f, "program too large for VM memory"),
            Self::Font(msg) => write!(f, "font error: {msg}"),
        }
    }
}

impl std::error::Error for Chip8Error {}

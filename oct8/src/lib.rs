mod clock;
pub mod constants;
mod cpu;
mod error;
mod keys;
mod vm;

use self::constants::DISPLAY_BUFFER_SIZE;

/// Boolean pixel grid, row-major, presented by display surfaces.
pub type DisplayFrame = [bool; DISPLAY_BUFFER_SIZE];

pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use self::vm::Hz;

pub mod prelude {
    pub use super::{
        error::{Chip8Error, Chip8Result},
        keys::{InvalidKeyCode, KeyCode},
        vm::{Chip8Conf, Chip8Vm, Flow},
    };
}

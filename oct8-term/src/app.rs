//! Run loop.
use std::{
    thread,
    time::{Duration, Instant},
};

use log::debug;
use oct8::prelude::*;

use crate::{error::AppError, input::Input, screen::Screen};

/// Nominal frame interval. One scheduler tick runs per frame.
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

pub struct App {
    vm: Chip8Vm,
    screen: Screen,
    input: Input,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            vm: Chip8Vm::new(Chip8Conf::default()),
            screen: Screen::new()?,
            input: Input::new(),
        })
    }

    /// Load ROM contents into the VM.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), AppError> {
        self.vm.load_rom(rom)?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            let frame_start = Instant::now();

            // Fresh key state before the instruction batch. The terminal
            // reports presses only, so held keys are re-reported by repeat
            // and everything else decays at the frame boundary.
            self.vm.clear_keys();
            for key in self.input.poll()? {
                self.vm.set_key(*key, true);
            }
            if self.input.quit() {
                return Ok(());
            }

            if let Ok(keys) = self.vm.dump_keys() {
                if !keys.is_empty() {
                    debug!("{keys}");
                }
            }

            self.vm.tick()?;

            // Redraw only when the machine touched the display.
            if let Some(frame) = self.vm.take_frame() {
                self.screen.present(frame)?;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_TIME {
                thread::sleep(FRAME_TIME - elapsed);
            }
        }
    }
}

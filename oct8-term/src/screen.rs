//! Display surface: the frame-buffer rasterized into a terminal.
use std::io::{self, Stdout, Write};

use crossterm::{cursor, queue, style, terminal, QueueableCommand};
use oct8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use oct8::DisplayFrame;

/// Raw-mode alternate-screen terminal. The grid is drawn one block
/// character per pixel.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> crossterm::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;
        Ok(Screen { stdout })
    }

    pub fn present(&mut self, frame: &DisplayFrame) -> crossterm::Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                let glyph = if frame[x + y * DISPLAY_WIDTH] {
                    "█"
                } else {
                    " "
                };
                self.stdout.queue(style::Print(glyph))?;
            }
            self.stdout.queue(cursor::MoveToNextLine(1))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Teardown is best effort.
        let _ = queue!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}

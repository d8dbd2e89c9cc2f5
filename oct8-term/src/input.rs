//! Input surface: terminal key events mapped onto the 16-key pad.
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode as TermKey, KeyEvent};
use log::trace;
use oct8::prelude::KeyCode;

/// Conventional QWERTY layout for the COSMAC VIP 16-key pad.
#[rustfmt::skip]
const KEYMAP: [(char, KeyCode); 16] = [
    ('x', KeyCode::Key0),
    ('1', KeyCode::Key1),
    ('2', KeyCode::Key2),
    ('3', KeyCode::Key3),
    ('q', KeyCode::Key4),
    ('w', KeyCode::Key5),
    ('e', KeyCode::Key6),
    ('a', KeyCode::Key7),
    ('s', KeyCode::Key8),
    ('d', KeyCode::Key9),
    ('z', KeyCode::KeyA),
    ('c', KeyCode::KeyB),
    ('4', KeyCode::KeyC),
    ('r', KeyCode::KeyD),
    ('f', KeyCode::KeyE),
    ('v', KeyCode::KeyF),
];

pub struct Input {
    buffer: Vec<KeyCode>,
    quit: bool,
}

impl Input {
    pub fn new() -> Self {
        Input {
            buffer: Vec::new(),
            quit: false,
        }
    }

    /// Drain pending terminal events into pad keys for this frame.
    pub fn poll(&mut self) -> crossterm::Result<&[KeyCode]> {
        self.buffer.clear();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code: TermKey::Esc, ..
                }) => self.quit = true,
                Event::Key(KeyEvent {
                    code: TermKey::Char(ch),
                    ..
                }) => match map_key(ch) {
                    Some(key) => self.buffer.push(key),
                    None => trace!("no pad mapping for {ch:?}"),
                },
                _ => {}
            }
        }

        Ok(self.buffer.as_slice())
    }

    /// Whether the user asked to quit. Checked once per scheduler tick.
    pub fn quit(&self) -> bool {
        self.quit
    }
}

fn map_key(ch: char) -> Option<KeyCode> {
    KEYMAP
        .iter()
        .find(|(mapped, _)| *mapped == ch)
        .map(|(_, key)| *key)
}

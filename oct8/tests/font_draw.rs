//! End-to-end: a program that draws a font glyph and spins.
use oct8::constants::{DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_TABLE};
use oct8::prelude::*;

/// Draws the hexadecimal digit '0' at the origin, then jumps to itself.
#[rustfmt::skip]
const PROGRAM: &[u8] = &[
    0xA0, 0x00, // LD I, 0x000  ; font sprite for '0'
    0x60, 0x00, // LD V0, 0
    0x61, 0x00, // LD V1, 0
    0xD0, 0x15, // DRW V0, V1, 5
    0x12, 0x08, // JP 0x208     ; spin
];

#[test]
fn draws_font_glyph_then_spins() {
    let mut vm = Chip8Vm::new(Chip8Conf::default());
    vm.load_rom(PROGRAM).unwrap();

    assert_eq!(vm.run_steps(4).unwrap(), Flow::Draw);

    // The frame-buffer holds exactly the glyph for '0' at the origin.
    let frame = vm.take_frame().expect("draw must mark the frame");
    for (row, byte) in FONT_TABLE[..FONT_GLYPH_SIZE].iter().enumerate() {
        for col in 0..8 {
            let lit = (byte >> (7 - col)) & 1 != 0;
            assert_eq!(frame[col + row * DISPLAY_WIDTH], lit, "pixel ({col}, {row})");
        }
    }

    let text = vm.dump_display().unwrap();
    assert!(text.starts_with("####"), "glyph row: {text}");

    // The jump spins in place without touching the display.
    let before = vm.display_buffer().to_vec();
    for _ in 0..32 {
        assert_eq!(vm.step().unwrap(), Flow::Jump);
    }
    assert!(vm.take_frame().is_none());
    assert_eq!(vm.display_buffer()[..], before[..]);
}

/// The scheduler tick keeps servicing timers and input while the engine
/// holds at a wait-for-key instruction.
#[test]
fn key_wait_does_not_starve_the_scheduler() {
    let mut vm = Chip8Vm::new(Chip8Conf::default());
    vm.load_rom(&[
        0xF0, 0x0A, // LD V0, K
        0x12, 0x00, // JP 0x200
    ])
    .unwrap();

    // No key pressed: each tick returns promptly with the wait signal.
    for _ in 0..3 {
        assert_eq!(vm.tick().unwrap(), Flow::KeyWait);
    }

    vm.set_key(KeyCode::Key7, true);
    let flow = vm.tick().unwrap();
    assert_ne!(flow, Flow::KeyWait);
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oct8::prelude::*;

/// Endless loop that walks a font sprite across the display.
#[rustfmt::skip]
const PROGRAM: &[u8] = &[
    0xA0, 0x00, // LD I, 0x000
    0xD0, 0x15, // DRW V0, V1, 5
    0x70, 0x03, // ADD V0, 3
    0x71, 0x01, // ADD V1, 1
    0x12, 0x02, // JP 0x202
];

fn criterion_benchmark(c: &mut Criterion) {
    {
        let mut vm = Chip8Vm::new(Chip8Conf::default());
        vm.load_rom(PROGRAM).unwrap();

        c.bench_function("draw loop", |b| {
            b.iter(|| {
                let step_count = black_box(1000_usize);
                black_box(vm.run_steps(step_count))
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

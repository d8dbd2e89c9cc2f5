//! Entrypoint for the terminal frontend.
use std::{env, fs, process};

use log::error;
use oct8::IMPL_VERSION;

mod app;
mod error;
mod input;
mod screen;

use crate::{app::App, error::AppError};

static USAGE: &str = "\
usage: oct8 FILE

Runs the ROM file FILE in the terminal.

Keys 1234/qwer/asdf/zxcv map to the 16-key pad. Esc quits.
";

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .unwrap();

    let rom_path = match parse_args() {
        Some(path) => path,
        None => {
            print_usage();
            // FreeBSD EX_USAGE (64)
            process::exit(64);
        }
    };

    if let Err(err) = run(&rom_path) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(rom_path: &str) -> Result<(), AppError> {
    let rom = fs::read(rom_path)?;

    let mut app = App::new()?;
    app.load_rom(&rom)?;
    app.run()
}

/// Exactly one argument: the ROM file path.
fn parse_args() -> Option<String> {
    let mut args = env::args().skip(1);
    let path = args.next()?;
    if args.next().is_some() {
        return None;
    }
    Some(path)
}

fn print_usage() {
    println!("oct8 v{IMPL_VERSION}");
    println!("{USAGE}");
}

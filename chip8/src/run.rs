use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{error, info};

use chipvm_core::{Chip8, Step, CLOCK_SPEED};
use chipvm_display::Display;

use crate::input::{Command, Keyboard, RawMode};

/// Loads `rom` and runs it until the CPU faults or the player presses Esc.
pub fn run(rom: PathBuf) -> anyhow::Result<()> {
    let mut chip8: Chip8 = Chip8::new();
    let stdout = io::stdout();
    let mut display = Display::new(stdout.lock());

    // Load ROM
    let file = File::open(&rom).with_context(|| format!("unable to open {}", rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", rom.display()))?;
    info!("successfully loaded ROM {}", rom.display());

    // Read keys as they're typed; the terminal is restored when this goes out of scope
    let _raw_mode = RawMode::enable().context("unable to read the keyboard")?;
    let mut keyboard = Keyboard::new();

    // Set initial timing
    let cycle_time = Duration::from_nanos(CLOCK_SPEED);
    let mut last_cycle = Instant::now();
    let mut waiting = false;

    loop {
        // Handle input
        if keyboard.poll(&mut chip8).context("unable to read the keyboard")? == Command::Quit {
            info!("quitting");
            break;
        }

        // Update state
        match chip8.step() {
            Ok(Step::Continue) => waiting = false,
            Ok(Step::WaitingForKey) => {
                if !waiting {
                    info!("waiting for a key press");
                }
                waiting = true;
            }
            Err(err) => {
                error!("stopping: {}", err);
                break;
            }
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.get_frame() {
            display.render(&frame).context("unable to draw frame")?;
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if cycle_time > elapsed_cycle_time {
            thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}

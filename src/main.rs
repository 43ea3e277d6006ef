mod external;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use chippy::{CycleStatus, Processor, Rom};
use clap::Parser;
use external::input::{KeyboardDriver, Poll};
use external::output::DisplayDriver;

#[derive(Parser, Debug)]
#[command(name = "chippy", about = "Run a CHIP-8 program in a window.")]
struct Args {
    /// Path to ROM file.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,

    /// Factor applied to screen dimensions.
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Cycles per second; the timers decay at this rate too.
    #[arg(long, default_value_t = 60)]
    rate: u32,

    /// Seed for the random instruction (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    if args.scale == 0 || args.rate == 0 {
        Err("scale and rate must be positive")?;
    }

    let rom = Rom::from_path(&args.file)?;
    let mut chip8 = match args.seed {
        Some(seed) => Processor::with_seed(seed),
        None => Processor::new(),
    };
    chip8.load_rom(&rom)?;
    log::info!("running {} at {} Hz", args.file.display(), args.rate);

    let context = sdl2::init()?;
    let mut display = DisplayDriver::new(&context, args.scale)?;
    let mut keyboard = KeyboardDriver::new(&context)?;
    let period = Duration::from_secs(1) / args.rate;

    loop {
        let started = Instant::now();
        match keyboard.poll() {
            Poll::Quit => break,
            Poll::Keys(keys) => chip8.set_keys(keys),
        }

        match chip8.cycle() {
            Ok(CycleStatus::RedrawScreen) => display.draw(chip8.display())?,
            Ok(CycleStatus::Continue | CycleStatus::Waiting) => {}
            Err(err) => {
                log::error!("halted: {err}");
                return Err(err.into());
            }
        }

        if let Some(rest) = period.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
    Ok(())
}

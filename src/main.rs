use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lfx_ws2801_spi::{Color, ConnectorOptions, Level, SpidevTransport, Ws2801Connector};

#[derive(Parser)]
#[command(name = "ws2801ctl")]
#[command(about = "Bring-up tool for WS2801 LED strands on a 2-wire SPI bus.", long_about = None)]
struct Cli {
    /// Path to connector options file (JSON: {"device": "/dev/spidev0.0", "count": 32})
    options: String,

    #[command(subcommand)]
    pattern: Pattern,

    /// Print connector metadata before running
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Pattern {
    /// Light the whole strand in one color and exit
    Fill {
        r: u8,
        g: u8,
        b: u8,
        /// Brightness multiplier applied to every pixel
        #[arg(long, default_value_t = 1.0)]
        level: f32,
    },
    /// Turn the whole strand off and exit
    Blank,
    /// Walk a single lit pixel down the strand until interrupted
    Chase {
        r: u8,
        g: u8,
        b: u8,
        /// Milliseconds between steps
        #[arg(long, default_value_t = 50)]
        interval_ms: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let options_data = fs::read_to_string(&cli.options)
        .context(format!("Failed to read options file {}", cli.options))?;
    let options: ConnectorOptions =
        serde_json::from_str(&options_data).context("Failed to parse connector options")?;

    if cli.debug {
        let metadata = serde_json::to_string_pretty(&Ws2801Connector::<SpidevTransport>::metadata())?;
        println!("{}", metadata);
    }

    let mut strand = Ws2801Connector::open(&options)?;
    println!("✓ Opened {} ({} pixels)", options.device, options.count);

    match cli.pattern {
        Pattern::Fill { r, g, b, level } => {
            strand.set_level(Level::Value(level), None, None);
            strand.set_color(Color::rgb(r, g, b), None, None)?;
            strand.render(0, 0)?;
            println!("✓ Strand filled with ({}, {}, {})", r, g, b);
        }
        Pattern::Blank => {
            strand.set_color(Color::rgb(0, 0, 0), None, None)?;
            strand.render(0, 0)?;
            println!("✓ Strand blanked");
        }
        Pattern::Chase { r, g, b, interval_ms } => {
            run_chase(&mut strand, Color::rgb(r, g, b), interval_ms)?;
        }
    }

    Ok(())
}

/// Step one lit pixel down the strand until Ctrl-C, then blank it
fn run_chase(
    strand: &mut Ws2801Connector<SpidevTransport>,
    color: Color,
    interval_ms: u64,
) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    let result = ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::Relaxed);
    });

    if let Err(e) = result {
        eprintln!("Warning: Could not set Ctrl-C handler: {}", e);
    }

    println!("Chasing... (Press Ctrl-C to stop)");

    let mut frame = 0u64;
    let mut last_step = Instant::now();

    while running.load(Ordering::Relaxed) {
        let pixel = (frame as usize) % strand.len();

        strand.set_color(Color::rgb(0, 0, 0), None, None)?;
        // The mutator's range bound shrinks by the start offset, so touching
        // exactly pixel i takes end = 2i + 1.
        strand.set_color(color.clone(), Some(pixel), Some(2 * pixel + 1))?;

        let delta = last_step.elapsed().as_millis() as u64;
        strand.render(frame, delta)?;
        last_step = Instant::now();

        frame += 1;
        thread::sleep(Duration::from_millis(interval_ms));
    }

    // Leave the strand dark on exit
    strand.set_color(Color::rgb(0, 0, 0), None, None)?;
    strand.render(frame, 0)?;
    println!("\n✓ Strand blanked");

    Ok(())
}

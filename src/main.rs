//! Spin Hex headless driver
//!
//! Runs the simulation at a fixed frame rate and writes one JSON snapshot per
//! printed frame to stdout, for piping into a renderer or plotting tool.
//!
//! Settings come from the path given as the first argument, or from
//! `SPIN_HEX_SETTINGS`; otherwise defaults are used.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use spin_hex::settings::SETTINGS_ENV;
use spin_hex::{DriverSettings, FixedStepper, Simulation};

fn settings_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(SETTINGS_ENV).ok())
        .map(PathBuf::from)
}

fn write_snapshot(out: &mut impl Write, sim: &Simulation, pretty: bool) -> io::Result<()> {
    let snapshot = sim.snapshot();
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
    } else {
        serde_json::to_writer(&mut *out, &snapshot)?;
    }
    writeln!(out)
}

fn run(settings: &DriverSettings) -> io::Result<()> {
    let mut sim = Simulation::new();
    let mut stepper = FixedStepper::new(sim.params.fixed_dt, settings.max_substeps);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for frame in 0..settings.frames {
        stepper.advance(&mut sim, settings.frame_dt);
        if settings.should_print(frame) {
            write_snapshot(&mut out, &sim, settings.pretty)?;
        }
    }
    out.flush()?;

    log::info!(
        "Finished {} frames ({} steps, {:.2}s simulated, final ball speed {:.2})",
        settings.frames,
        sim.time_ticks,
        sim.elapsed,
        sim.ball.speed()
    );
    Ok(())
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Spin Hex (headless) starting...");

    let settings = match settings_path() {
        Some(path) => DriverSettings::load(&path),
        None => DriverSettings::default(),
    };
    log::info!("Settings: {:?}", settings);

    if let Err(e) = run(&settings) {
        log::error!("Output failed: {}", e);
        std::process::exit(1);
    }
}

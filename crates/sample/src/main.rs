//! Sample navigation app for the wearable component kit.
//!
//! Walks the route table on an emulated round panel: renders the menu, pushes
//! the sync screen and drives the indicator through its repeating cycle, then
//! shows the about screen. Frames are exported as PNGs for inspection.

// Application crate — rustdoc on every private item adds nothing here.
#![allow(missing_docs)]

mod config;
mod navigation;
mod render;
mod screen;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use wear_components::prelude::*;
use wear_emulator::{Emulator, EmulatorConfig};

use config::SampleConfig;
use navigation::Navigator;
use screen::Screen;

#[derive(Parser)]
#[command(name = "sample")]
#[command(about = "Wearable components sample app", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render one frame per screen instead of running full sync cycles
    #[arg(long)]
    quick: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SampleConfig::load(path)?,
        None => SampleConfig::default(),
    };

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut emulator = Emulator::new(EmulatorConfig {
        width: config.width,
        height: config.height,
        round_mask: config.round_mask,
    });
    let mut navigator = Navigator::new();

    // Root screen.
    render::render_screen(navigator.current(), &mut emulator, Progress::START)?;
    save_frame(&emulator, &config.output_dir, "menu")?;
    info!(route = navigator.current().route(), "rendered");

    // Sync screen, driven through its repeating cycle.
    navigator.push(Screen::Sync);
    info!(
        route = navigator.current().route(),
        depth = navigator.depth(),
        "navigated"
    );
    run_sync_screen(&config, &cli, &mut emulator, &navigator)?;

    // About screen replaces sync on top of the stack.
    navigator.replace(Screen::About);
    render::render_screen(navigator.current(), &mut emulator, Progress::START)?;
    save_frame(&emulator, &config.output_dir, "about")?;
    info!(route = navigator.current().route(), "rendered");

    navigator.back();
    info!(
        route = navigator.current().route(),
        depth = navigator.depth(),
        "done"
    );
    Ok(())
}

/// Drive the sync screen through `config.cycles` full animation cycles,
/// saving a subset of the rendered frames.
fn run_sync_screen(
    config: &SampleConfig,
    cli: &Cli,
    emulator: &mut Emulator,
    navigator: &Navigator,
) -> Result<()> {
    if cli.quick {
        let progress = Progress::new(0.05).map_err(|e| anyhow!("{e}"))?;
        render::render_screen(navigator.current(), emulator, progress)?;
        save_frame(emulator, &config.output_dir, "sync")?;
        return Ok(());
    }

    let cycle = SyncCycle::new(
        Duration::from_millis(config.ramp_ms),
        Duration::from_millis(config.hold_ms),
    );
    let fps = config.fps.max(1);
    let frame_interval = Duration::from_millis(u64::from(1000 / fps));
    let total = cycle.period().saturating_mul(config.cycles.max(1));
    // Save roughly five frames per second of animation.
    let save_every = (fps / 5).max(1);

    let mut ticker = Ticker::new(cycle);
    ticker.start();
    let mut frame: u32 = 0;
    while ticker.elapsed() < total {
        let progress = ticker.progress();
        render::render_screen(navigator.current(), emulator, progress)?;
        if frame % save_every == 0 {
            save_frame(emulator, &config.output_dir, &format!("sync_{frame:04}"))?;
        }
        debug!(frame, progress = progress.value(), "sync frame");
        frame = frame.wrapping_add(1);
        std::thread::sleep(frame_interval);
    }
    ticker.stop();
    info!(frames = frame, "sync cycle finished");
    Ok(())
}

/// Save the emulator framebuffer as `<output_dir>/<name>.png`.
fn save_frame(emulator: &Emulator, output_dir: &Path, name: &str) -> Result<()> {
    let path = output_dir.join(format!("{name}.png"));
    emulator
        .screenshot(&path)
        .map_err(|e| anyhow!("failed to save frame {}: {e}", path.display()))
}

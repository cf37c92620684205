#![warn(clippy::all)]

use anyhow::Result;
use gol_sim::{LifeGrid, RenderSink, SimConfig, Simulation};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

/// Textual stand-in for the GUI: redraws the whole board on every frame.
struct TermSink {
    frame: u64,
}

impl RenderSink for TermSink {
    fn present(&mut self, grid: &LifeGrid) {
        let n = grid.size();
        let mut out = String::with_capacity((n + 1) * n + 64);
        out.push_str("\x1b[2J\x1b[H");
        for row in 0..n {
            for col in 0..n {
                out.push(if grid.get(row, col) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "frame {}  population {}\n",
            self.frame,
            grid.population()
        ));
        print!("{out}");
        let _ = std::io::stdout().flush();
        self.frame += 1;
    }
}

fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut config = SimConfig::default();
    if let Some(size) = env_parsed("LIFE_SIZE") {
        config.size = size;
    }
    if let Some(workers) = env_parsed("LIFE_WORKERS") {
        config.workers = workers;
    }
    if let Some(fill_rate) = env_parsed("LIFE_FILL_RATE") {
        config.fill_rate = fill_rate;
    }
    if let Some(interval_ms) = env_parsed("LIFE_INTERVAL_MS") {
        config.interval_ms = interval_ms;
    }
    if let Some(seed) = env_parsed("LIFE_SEED") {
        config.seed = Some(seed);
    }
    let frames: u64 = env_parsed("LIFE_FRAMES").unwrap_or(200);

    let handle = Simulation::spawn(config.clone(), TermSink { frame: 0 })?;
    handle.start();
    std::thread::sleep(Duration::from_millis(config.interval_ms * frames));
    handle.stop();
    handle.shutdown();
    Ok(())
}

use crate::config::SimConfig;
use crate::engine::BandedEngine;
use crate::grid::LifeGrid;
use anyhow::{Context, Result};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Discrete input-surface commands.
///
/// Commands are applied strictly between generations: an in-flight step
/// always completes before the next command is honored, so no generation
/// is ever partially applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip a single cell (click-to-toggle). Out-of-range coordinates are
    /// a no-op.
    Toggle { row: usize, col: usize },
    /// Kill every cell.
    Clear,
    /// Refill the field with random cells at the configured fill rate.
    Reset,
    /// Resume the generation loop.
    Start,
    /// Pause the generation loop; the field keeps its state.
    Stop,
    /// Change the generation interval; clamped to the legal range.
    SetSpeed { interval_ms: u64 },
    /// Terminate the control thread.
    Shutdown,
}

/// Receives every finished frame: one per generation while running, plus
/// one after each direct user mutation. Calls arrive at a variable rate
/// that follows the configured speed.
pub trait RenderSink: Send {
    fn present(&mut self, grid: &LifeGrid);
}

/// The generation loop and its state, owned by a dedicated control thread.
///
/// The thread is the sole owner of the grid: user commands and engine steps
/// serialize through it, which replaces shared `running`/speed flags with
/// message passing and makes a mutation racing an in-flight step impossible
/// by construction.
pub struct Simulation<S> {
    grid: LifeGrid,
    engine: BandedEngine,
    sink: S,
    rx: Receiver<Command>,
    running: bool,
    interval: Duration,
    fill_rate: f64,
    seed: Option<u64>,
    generation: u64,
}

/// Command channel to a running [`Simulation`].
///
/// Dropping the handle without [`shutdown`] disconnects the channel and the
/// control thread exits on its own.
///
/// [`shutdown`]: SimHandle::shutdown
pub struct SimHandle {
    tx: Sender<Command>,
    thread: Option<JoinHandle<()>>,
}

impl<S: RenderSink + 'static> Simulation<S> {
    /// Validates `config`, builds the grid and the engine, presents the
    /// initial frame and moves everything onto a new control thread.
    ///
    /// The simulation starts paused; send [`Command::Start`] to run it.
    pub fn spawn(config: SimConfig, mut sink: S) -> Result<SimHandle> {
        config.validate()?;
        let engine = BandedEngine::new(config.workers)?;
        let grid = LifeGrid::random(config.size, config.seed, config.fill_rate);
        sink.present(&grid);

        let (tx, rx) = mpsc::channel();
        let sim = Simulation {
            grid,
            engine,
            sink,
            rx,
            running: false,
            interval: Duration::from_millis(config.interval_ms),
            fill_rate: config.fill_rate,
            seed: config.seed,
            generation: 0,
        };
        let thread = std::thread::Builder::new()
            .name("life-control".into())
            .spawn(move || sim.run())
            .context("failed to spawn control thread")?;
        Ok(SimHandle {
            tx,
            thread: Some(thread),
        })
    }

    fn run(mut self) {
        log::info!(
            "control thread started: {0}x{0} field, {1} workers, {2:?} per generation",
            self.grid.size(),
            self.engine.workers(),
            self.interval
        );
        let mut next_tick = Instant::now();
        loop {
            let cmd = if self.running {
                let now = Instant::now();
                if now >= next_tick {
                    self.advance();
                    next_tick = Instant::now() + self.interval;
                    continue;
                }
                match self.rx.recv_timeout(next_tick - now) {
                    Ok(cmd) => cmd,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            } else {
                match self.rx.recv() {
                    Ok(cmd) => cmd,
                    Err(_) => break,
                }
            };

            if cmd == Command::Shutdown {
                break;
            }
            if cmd == Command::Start {
                next_tick = Instant::now();
            }
            self.apply(cmd);
        }
        log::info!("control thread exiting after {} generations", self.generation);
    }

    fn advance(&mut self) {
        self.engine.step(&mut self.grid);
        self.generation += 1;
        self.sink.present(&self.grid);
    }

    fn apply(&mut self, cmd: Command) {
        log::debug!("command: {cmd:?}");
        match cmd {
            Command::Toggle { row, col } => {
                self.grid.toggle(row, col);
                self.sink.present(&self.grid);
            }
            Command::Clear => {
                self.grid.clear();
                self.sink.present(&self.grid);
            }
            Command::Reset => {
                self.grid.randomize(self.seed, self.fill_rate);
                self.sink.present(&self.grid);
            }
            Command::Start => self.running = true,
            Command::Stop => self.running = false,
            Command::SetSpeed { interval_ms } => {
                let clamped = SimConfig::clamp_interval(interval_ms);
                if clamped != interval_ms {
                    log::debug!("interval {interval_ms} ms clamped to {clamped} ms");
                }
                self.interval = Duration::from_millis(clamped);
            }
            Command::Shutdown => unreachable!("handled in run"),
        }
    }
}

impl SimHandle {
    pub fn send(&self, cmd: Command) {
        let _ = self.tx.send(cmd);
    }

    pub fn toggle_cell(&self, row: usize, col: usize) {
        self.send(Command::Toggle { row, col });
    }

    pub fn clear(&self) {
        self.send(Command::Clear);
    }

    pub fn reset(&self) {
        self.send(Command::Reset);
    }

    pub fn start(&self) {
        self.send(Command::Start);
    }

    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    pub fn set_speed(&self, interval_ms: u64) {
        self.send(Command::SetSpeed { interval_ms });
    }

    /// Stops the control thread and waits for it to finish. A step in
    /// flight completes first; nothing is ever left half-applied.
    pub fn shutdown(mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for SimHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
    }
}

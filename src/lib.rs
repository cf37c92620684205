#![warn(clippy::all)]

mod config;
mod control;
mod engine;
mod grid;
mod partition;

pub use config::SimConfig;
pub use control::{Command, RenderSink, SimHandle, Simulation};
pub use engine::BandedEngine;
pub use grid::LifeGrid;
pub use partition::row_bands;

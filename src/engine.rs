use crate::grid::LifeGrid;
use crate::partition::row_bands;
use anyhow::{ensure, Context, Result};
use std::ops::Range;

/// Advances a [`LifeGrid`] one generation at a time on a fixed pool of
/// worker threads.
///
/// Rows are partitioned into contiguous bands, one per worker. During a
/// step every worker reads the pre-step grid, which stays immutable until
/// the whole generation is done, and writes only its own rows of a separate
/// next-generation buffer. The buffers are physically distinct, so a worker
/// can never observe a neighbor row that was already rewritten for the
/// current generation, and band disjointness rules out write conflicts.
///
/// The pool is built once and reused across generations; `workers` above
/// the side length is legal and leaves the surplus workers idle.
pub struct BandedEngine {
    workers: usize,
    pool: rayon::ThreadPool,
}

impl BandedEngine {
    pub fn new(workers: usize) -> Result<Self> {
        ensure!(workers >= 1, "worker count must be positive, got {workers}");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("life-worker-{i}"))
            .build()
            .context("failed to build worker pool")?;
        Ok(Self { workers, pool })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Band layout for a field with `rows` rows, identical to the one
    /// `step` dispatches with.
    pub fn bands(&self, rows: usize) -> Vec<Range<usize>> {
        row_bands(rows, self.workers)
    }

    /// Computes one generation and installs it as the new current state.
    ///
    /// Blocks until every band has been written; the grid is never visible
    /// in a half-stepped state.
    pub fn step(&self, grid: &mut LifeGrid) {
        let n = grid.size();
        let mut next = vec![false; n * n];
        let bands = self.bands(n);
        let src: &LifeGrid = grid;
        self.pool.scope(|s| {
            let mut rest = next.as_mut_slice();
            for band in &bands {
                let (rows, tail) = rest.split_at_mut(band.len() * n);
                rest = tail;
                let start = band.start;
                s.spawn(move |_| {
                    for (i, out_row) in rows.chunks_mut(n).enumerate() {
                        step_row(src, start + i, out_row);
                    }
                });
            }
        });
        grid.replace(next);
    }
}

/// B3/S23: a live cell survives with 2 or 3 live neighbors, a dead cell
/// is born with exactly 3.
fn step_row(src: &LifeGrid, row: usize, out: &mut [bool]) {
    for (col, cell) in out.iter_mut().enumerate() {
        let neighbors = src.count_neighbors(row, col);
        *cell = if src.get(row, col) {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        };
    }
}

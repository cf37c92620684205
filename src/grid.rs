use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Square toroidal field of cells, stored row-major.
///
/// The side length is fixed at construction; every mutation preserves
/// `cells.len() == size * size`. Neighbor lookups wrap around both axes,
/// so the field has no edges: row 0 borders row `size - 1` and column 0
/// borders column `size - 1`.
#[derive(Clone)]
pub struct LifeGrid {
    cells: Vec<bool>,
    size: usize,
}

impl LifeGrid {
    /// Creates a field filled with dead cells.
    pub fn blank(size: usize) -> Self {
        assert!(size >= 1);
        Self {
            cells: vec![false; size * size],
            size,
        }
    }

    /// Creates a field with each cell independently alive with probability
    /// `fill_rate`.
    pub fn random(size: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        let mut grid = Self::blank(size);
        grid.randomize(seed, fill_rate);
        grid
    }

    /// Refills the field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        let mut rng = match seed {
            Some(x) => ChaCha8Rng::seed_from_u64(x),
            None => ChaCha8Rng::from_entropy(),
        };
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Cell state at (row, col); both must be in `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.size]
    }

    /// Toroidal lookup: indices are normalized modulo the side length, so
    /// row -1 reads the bottom row and row `size` reads the top one.
    pub fn get_wrapped(&self, row: i64, col: i64) -> bool {
        let n = self.size as i64;
        let (row, col) = (row.rem_euclid(n) as usize, col.rem_euclid(n) as usize);
        self.cells[col + row * self.size]
    }

    /// Sum of the 8 Moore neighbors of (row, col), wrapping at the edges.
    pub fn count_neighbors(&self, row: usize, col: usize) -> usize {
        let r1 = if row == 0 { self.size - 1 } else { row - 1 };
        let r2 = if row == self.size - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { self.size - 1 } else { col - 1 };
        let c2 = if col == self.size - 1 { 0 } else { col + 1 };
        self.get(r1, c1) as usize
            + self.get(r1, col) as usize
            + self.get(r1, c2) as usize
            + self.get(row, c1) as usize
            + self.get(row, c2) as usize
            + self.get(r2, c1) as usize
            + self.get(r2, col) as usize
            + self.get(r2, c2) as usize
    }

    /// Direct write from the input surface. Out-of-range coordinates come
    /// from pointer positions that missed the board and are dropped.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row >= self.size || col >= self.size {
            log::debug!("dropping set({row}, {col}) outside {0}x{0} field", self.size);
            return;
        }
        self.cells[col + row * self.size] = value;
    }

    /// Flips a single cell; out-of-range coordinates are dropped like [`set`].
    ///
    /// [`set`]: LifeGrid::set
    pub fn toggle(&mut self, row: usize, col: usize) {
        if row >= self.size || col >= self.size {
            log::debug!("dropping toggle({row}, {col}) outside {0}x{0} field", self.size);
            return;
        }
        let i = col + row * self.size;
        self.cells[i] = !self.cells[i];
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Installs a fully computed next generation as the current state.
    ///
    /// `next` must have been sized for this field; a mismatch is a bug in
    /// the caller, not a recoverable condition.
    pub fn replace(&mut self, next: Vec<bool>) {
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
    }
}

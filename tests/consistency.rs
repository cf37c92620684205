use gol_sim::{BandedEngine, LifeGrid};

const N: usize = 64;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

#[test]
fn test_parallel_matches_sequential() {
    let mut sequential = LifeGrid::random(N, Some(SEED), FILL_RATE);
    let mut banded = LifeGrid::random(N, Some(SEED), FILL_RATE);
    assert_eq!(sequential.cells(), banded.cells());

    let one = BandedEngine::new(1).unwrap();
    let eight = BandedEngine::new(8).unwrap();
    for generation in 0..N {
        one.step(&mut sequential);
        eight.step(&mut banded);
        assert_eq!(
            sequential.cells(),
            banded.cells(),
            "fields diverged at generation {generation}"
        );
    }
}

#[test]
fn test_more_workers_than_rows() {
    let mut reference = LifeGrid::random(5, Some(SEED), FILL_RATE);
    let mut oversubscribed = reference.clone();

    let one = BandedEngine::new(1).unwrap();
    let many = BandedEngine::new(8).unwrap();
    for _ in 0..20 {
        one.step(&mut reference);
        many.step(&mut oversubscribed);
        assert_eq!(reference.cells(), oversubscribed.cells());
    }
}

/// A glider translates by (1, 1) every 4 generations; on a 20x20 torus it
/// crosses both seams and returns to its starting cells after 80.
#[test]
fn test_glider_laps_the_torus() {
    const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let n = 20;
    let base = (10, 10);

    let mut grid = LifeGrid::blank(n);
    for &(row, col) in &GLIDER {
        grid.set(base.0 + row, base.1 + col, true);
    }
    let start = grid.cells().to_vec();

    let engine = BandedEngine::new(4).unwrap();
    for _ in 0..4 {
        engine.step(&mut grid);
    }
    for &(row, col) in &GLIDER {
        assert!(grid.get(base.0 + row + 1, base.1 + col + 1));
    }
    assert_eq!(grid.population(), GLIDER.len());

    for _ in 4..4 * n {
        engine.step(&mut grid);
    }
    assert_eq!(grid.cells(), &start[..]);
}

//! Pathfinding benchmarks.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chakravyuh::{find_path, Cell, MazeGrid, QLearningConfig, QTrainer};

// ============================================================================
// Fixtures
// ============================================================================

/// Open maze with pillars on a sparse diagonal pattern.
///
/// All logical cells stay mutually reachable; the pillars only force the
/// searches to route around the odd-odd intersections they occupy.
fn create_bench_maze(logical: usize) -> MazeGrid {
    let size = logical * 2;
    let mut rows = Vec::with_capacity(size);

    for r in 0..size {
        let mut row = Vec::with_capacity(size);
        for c in 0..size {
            if r % 2 == 1 && c % 2 == 1 && (r + c) % 4 == 0 {
                row.push('#');
            } else {
                row.push('0');
            }
        }
        rows.push(row);
    }

    MazeGrid::from_rows(rows)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_astar(c: &mut Criterion) {
    let maze = create_bench_maze(20);
    let start = Cell::new(0, 0);
    let goal = Cell::new(19, 19);

    c.bench_function("astar_20x20", |b| {
        b.iter(|| find_path(black_box(&maze), black_box(start), black_box(goal)))
    });
}

fn bench_q_training(c: &mut Criterion) {
    let maze = create_bench_maze(5);

    c.bench_function("q_train_5x5", |b| {
        b.iter(|| {
            let mut trainer = QTrainer::with_seed(QLearningConfig::default(), 42);
            trainer.train(black_box(&maze), Cell::new(0, 0), Cell::new(4, 4))
        })
    });
}

criterion_group!(benches, bench_astar, bench_q_training);
criterion_main!(benches);

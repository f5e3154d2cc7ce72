//! Stepper throughput on seeded populations of growing density

use std::time::Instant;

use life_editor::{GridSize, LiveCells, seed};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_evolve(mut cells: LiveCells, grid: GridSize, iterations: u32) -> (f64, usize) {
    let mut visited = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        visited += cells.len();
        cells = cells.evolve(grid);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);
    (ms, visited / iterations as usize)
}

fn main() {
    println!("=== Sparse Life Stepper Benchmark ===\n");

    let grids = [GridSize::new(60, 40), GridSize::new(500, 500), GridSize::new(2000, 2000)];
    // Seeded cells per grid column, the same scale the reseed key uses
    let densities = [4, 10, 50];
    let iterations = 20;

    println!("{:>12} {:>10} {:>12} {:>12} {:>14}", "Grid", "Seeded", "Avg live", "ms/gen", "cells/sec");
    println!("{:-<64}", "");

    for grid in grids {
        for factor in densities {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let count = factor * grid.width as usize;
            let cells = seed(count, grid, &mut rng);
            let (ms, avg_live) = benchmark_evolve(cells, grid, iterations);

            let throughput = if ms > 0.0 {
                format!("{:>13.1}K", avg_live as f64 / (ms / 1000.0) / 1_000.0)
            } else {
                format!("{:>14}", "-")
            };

            println!(
                "{:>12} {:>10} {:>12} {:>12.3} {}",
                format!("{}x{}", grid.width, grid.height),
                count,
                avg_live,
                ms,
                throughput
            );
        }
    }
}

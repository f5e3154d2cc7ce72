use rand::Rng;

use super::{CellCoord, GridSize, LiveCells};

/// Scatter `count` uniformly random tiles over the grid.
/// Duplicates collapse, so the result may hold fewer than `count` cells.
pub fn seed<R: Rng>(count: usize, grid: GridSize, rng: &mut R) -> LiveCells {
    if grid.is_empty() {
        return LiveCells::new();
    }
    (0..count)
        .map(|_| {
            CellCoord::new(
                rng.random_range(0..grid.width),
                rng.random_range(0..grid.height),
            )
        })
        .collect()
}

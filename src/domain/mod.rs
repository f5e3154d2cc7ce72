mod cell;
mod grid;
mod life;
mod seed;

pub use cell::{Cell, CellCoord};
pub use grid::{GridSize, neighbors};
pub use life::LiveCells;
pub use seed::seed;

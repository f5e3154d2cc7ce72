use std::collections::HashSet;

use super::{Cell, CellCoord, GridSize, neighbors};

/// Sparse set of live tiles.
/// Each generation is built into a fresh set; the current one is only read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveCells {
    cells: HashSet<CellCoord>,
}

impl LiveCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    pub fn state(&self, cell: CellCoord) -> Cell {
        Cell::from_alive(self.contains(cell))
    }

    /// Flip one tile. Returns the new state, or `None` when `cell` is off the grid.
    pub fn toggle(&mut self, cell: CellCoord, grid: GridSize) -> Option<Cell> {
        if !grid.contains(cell) {
            return None;
        }
        if self.cells.remove(&cell) {
            Some(Cell::Dead)
        } else {
            self.cells.insert(cell);
            Some(Cell::Alive)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }

    fn live_neighbors(&self, cell: CellCoord, grid: GridSize) -> u8 {
        neighbors(cell, grid).filter(|n| self.contains(*n)).count() as u8
    }

    /// Advance one generation.
    ///
    /// Only live tiles and their neighbors can be alive next, so the work is
    /// proportional to the population rather than the grid area.
    pub fn evolve(&self, grid: GridSize) -> Self {
        let candidates: HashSet<CellCoord> = self
            .cells
            .iter()
            .flat_map(|&cell| neighbors(cell, grid))
            .chain(self.cells.iter().copied())
            .collect();

        let cells = candidates
            .into_iter()
            .filter(|&cell| {
                self.state(cell)
                    .evolve(self.live_neighbors(cell, grid))
                    .is_alive()
            })
            .collect();

        Self { cells }
    }
}

impl FromIterator<CellCoord> for LiveCells {
    fn from_iter<I: IntoIterator<Item = CellCoord>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

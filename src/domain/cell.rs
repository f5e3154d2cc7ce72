/// A tile address on the grid: (column, row).
/// Signed so that pointer positions left of or above the grid stay representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellCoord {
    pub column: i32,
    pub row: i32,
}

impl CellCoord {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Coordinate shifted by the given offset
    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self::new(self.column + dc, self.row + dr)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

/// State of a single tile in one generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// B3/S23: survive on 2 or 3 live neighbors, birth on exactly 3
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

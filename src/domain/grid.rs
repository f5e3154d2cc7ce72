use super::CellCoord;

/// Offsets of the eight surrounding tiles
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Bounded grid geometry in tiles. Fixed for the lifetime of a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

impl GridSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of whole tiles that fit in a window of the given pixel size
    pub const fn from_window(window_width: u32, window_height: u32, tile_size: u32) -> Self {
        if tile_size == 0 {
            return Self::new(0, 0);
        }
        Self::new(
            (window_width / tile_size) as i32,
            (window_height / tile_size) as i32,
        )
    }

    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column >= 0 && cell.column < self.width && cell.row >= 0 && cell.row < self.height
    }
}

/// Adjacent tiles of `cell`, clipped to the grid. The grid does not wrap,
/// so edge tiles have 5 neighbors and corners 3.
pub fn neighbors(cell: CellCoord, grid: GridSize) -> impl Iterator<Item = CellCoord> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |(dc, dr)| cell.offset(dc, dr))
        .filter(move |n| grid.contains(*n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_window_uses_whole_tiles() {
        assert_eq!(GridSize::from_window(1200, 800, 20), GridSize::new(60, 40));
        assert_eq!(GridSize::from_window(1210, 815, 20), GridSize::new(60, 40));
        assert_eq!(GridSize::from_window(100, 100, 0), GridSize::new(0, 0));
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let grid = GridSize::new(5, 4);
        assert_eq!(neighbors(CellCoord::new(0, 0), grid).count(), 3);
        assert_eq!(neighbors(CellCoord::new(4, 3), grid).count(), 3);
        assert_eq!(neighbors(CellCoord::new(2, 0), grid).count(), 5);
        assert_eq!(neighbors(CellCoord::new(0, 2), grid).count(), 5);
        assert_eq!(neighbors(CellCoord::new(2, 2), grid).count(), 8);
    }

    #[test]
    fn test_neighbors_in_bounds_unique_and_exclude_self() {
        let grid = GridSize::new(6, 3);
        for column in -1..=6 {
            for row in -1..=3 {
                let cell = CellCoord::new(column, row);
                let found: Vec<_> = neighbors(cell, grid).collect();
                let unique: HashSet<_> = found.iter().copied().collect();
                assert_eq!(found.len(), unique.len());
                assert!(!unique.contains(&cell));
                assert!(found.iter().all(|n| grid.contains(*n)));
            }
        }
    }

    #[test]
    fn test_single_tile_grid_has_no_neighbors() {
        let grid = GridSize::new(1, 1);
        assert_eq!(neighbors(CellCoord::new(0, 0), grid).count(), 0);
    }

    #[test]
    fn test_contains_rejects_negative_and_overflow() {
        let grid = GridSize::new(60, 40);
        assert!(grid.contains(CellCoord::new(0, 0)));
        assert!(grid.contains(CellCoord::new(59, 39)));
        assert!(!grid.contains(CellCoord::new(60, 0)));
        assert!(!grid.contains(CellCoord::new(0, 40)));
        assert!(!grid.contains(CellCoord::new(-1, 5)));
    }
}

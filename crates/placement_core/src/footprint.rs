//! Grid cells and rectangular building footprints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single grid cell.
///
/// Cells are unbounded integer coordinates; the grid extent is enforced by
/// [`OccupancyGrid`](crate::occupancy::OccupancyGrid), not here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cell {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Origin cell `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Size of a building in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FootprintSize {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl FootprintSize {
    /// Create a new footprint size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a square footprint size.
    #[must_use]
    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Total number of cells covered.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the size covers no cells at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Place this size at an origin cell.
    #[must_use]
    pub const fn at(self, origin: Cell) -> Footprint {
        Footprint { origin, size: self }
    }
}

impl Default for FootprintSize {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A footprint placed on the grid: an origin cell plus a fixed size.
///
/// Covers the half-open block `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    /// Lower-left cell of the block.
    pub origin: Cell,
    /// Block size.
    pub size: FootprintSize,
}

impl Footprint {
    /// Create a footprint at `origin` with the given dimensions.
    #[must_use]
    pub const fn new(origin: Cell, width: u32, height: u32) -> Self {
        Self {
            origin,
            size: FootprintSize::new(width, height),
        }
    }

    /// The same footprint moved to a new origin.
    #[must_use]
    pub const fn moved_to(self, origin: Cell) -> Self {
        Self {
            origin,
            size: self.size,
        }
    }

    /// Whether the footprint covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Whether `cell` lies inside the footprint.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        let dx = i64::from(cell.x) - i64::from(self.origin.x);
        let dy = i64::from(cell.y) - i64::from(self.origin.y);
        dx >= 0 && dy >= 0 && dx < i64::from(self.size.width) && dy < i64::from(self.size.height)
    }

    /// Iterate covered cells in row-major order (bottom row first).
    ///
    /// Cells whose coordinates would overflow `i32` are skipped; they can
    /// never be inside a grid anyway.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let origin = self.origin;
        (0..self.size.height).flat_map(move |dy| {
            (0..self.size.width).filter_map(move |dx| {
                let x = i32::try_from(i64::from(origin.x) + i64::from(dx)).ok()?;
                let y = i32::try_from(i64::from(origin.y) + i64::from(dy)).ok()?;
                Some(Cell::new(x, y))
            })
        })
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at {}",
            self.size.width, self.size.height, self.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_size() {
        let size = FootprintSize::new(3, 4);
        assert_eq!(size.cell_count(), 12);
        assert!(!size.is_empty());
        assert_eq!(FootprintSize::square(5).cell_count(), 25);
        assert!(FootprintSize::new(0, 3).is_empty());
    }

    #[test]
    fn test_footprint_cells_half_open() {
        let footprint = Footprint::new(Cell::new(2, 2), 2, 3);
        let cells: Vec<Cell> = footprint.cells().collect();

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(2, 2));
        assert_eq!(cells[1], Cell::new(3, 2));
        assert_eq!(cells[5], Cell::new(3, 4));
        assert!(!cells.contains(&Cell::new(4, 2)));
        assert!(!cells.contains(&Cell::new(2, 5)));
    }

    #[test]
    fn test_footprint_contains_matches_cells() {
        let footprint = Footprint::new(Cell::new(-1, -2), 3, 2);
        for y in -4..4 {
            for x in -4..4 {
                let cell = Cell::new(x, y);
                assert_eq!(
                    footprint.contains(cell),
                    footprint.cells().any(|c| c == cell),
                    "mismatch at {cell}"
                );
            }
        }
    }

    #[test]
    fn test_footprint_moved_to_keeps_size() {
        let footprint = Footprint::new(Cell::ORIGIN, 2, 1);
        let moved = footprint.moved_to(Cell::new(7, 3));
        assert_eq!(moved.size, footprint.size);
        assert_eq!(moved.origin, Cell::new(7, 3));
    }

    #[test]
    fn test_footprint_near_i32_max_skips_overflow() {
        let footprint = Footprint::new(Cell::new(i32::MAX, 0), 3, 1);
        assert_eq!(footprint.cells().count(), 1);
    }

    #[test]
    fn test_empty_footprint_has_no_cells() {
        let footprint = Footprint::new(Cell::ORIGIN, 0, 4);
        assert!(footprint.is_empty());
        assert_eq!(footprint.cells().count(), 0);
    }

    #[test]
    fn test_footprint_display() {
        let footprint = Footprint::new(Cell::new(1, 2), 2, 1);
        assert_eq!(footprint.to_string(), "2x1 at (1, 2)");
    }
}

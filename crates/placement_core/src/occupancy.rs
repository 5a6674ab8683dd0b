//! Authoritative permanent occupancy of the placement grid.
//!
//! The grid records, for every cell inside its fixed extent, whether the
//! ground is unplaceable, open for building, or already built on. It is
//! mutated during play only through [`OccupancyGrid::commit`]; the setup
//! methods exist for constructing maps.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};
use crate::footprint::{Cell, Footprint};

// ============================================================================
// Surface State
// ============================================================================

/// Terrain category of buildable ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Grassland.
    Grass,
    /// Sand or beach.
    Sand,
    /// Rocky ground.
    Stone,
}

impl TerrainKind {
    /// All terrain kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::Grass, Self::Sand, Self::Stone];
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceState {
    /// No buildable ground.
    Empty,
    /// Open ground of the given kind.
    Placeable(TerrainKind),
    /// Ground of the given kind that has been built on.
    Occupied(TerrainKind),
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::Empty
    }
}

impl SurfaceState {
    /// Whether a building may be placed on this cell.
    #[must_use]
    pub const fn is_placeable(self) -> bool {
        matches!(self, Self::Placeable(_))
    }

    /// Whether this cell has been built on.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Terrain kind, if the cell has ground at all.
    #[must_use]
    pub const fn terrain(self) -> Option<TerrainKind> {
        match self {
            Self::Empty => None,
            Self::Placeable(kind) | Self::Occupied(kind) => Some(kind),
        }
    }
}

/// Final state of a cell after a commit, reported to the visual layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    /// The cell that changed.
    pub cell: Cell,
    /// Its new state.
    pub state: SurfaceState,
}

// ============================================================================
// Occupancy Grid
// ============================================================================

/// Fixed-extent grid of [`SurfaceState`] covering `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    /// Grid width in cells.
    width: u32,
    /// Grid height in cells.
    height: u32,
    /// Cell data stored in row-major order.
    cells: Vec<SurfaceState>,
}

impl OccupancyGrid {
    /// Create a grid with every cell [`SurfaceState::Empty`].
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, SurfaceState::Empty)
    }

    /// Create a grid of open ground of a single kind.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn with_terrain(width: u32, height: u32, kind: TerrainKind) -> Self {
        Self::filled(width, height, SurfaceState::Placeable(kind))
    }

    fn filled(width: u32, height: u32, state: SurfaceState) -> Self {
        assert!(width > 0, "OccupancyGrid width must be positive");
        assert!(height > 0, "OccupancyGrid height must be positive");

        let cell_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![state; cell_count],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major index of `cell`, or `None` outside the extent.
    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        let x = u32::try_from(cell.x).ok()?;
        let y = u32::try_from(cell.y).ok()?;
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Check if a cell is within the grid extent.
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Whether a non-empty `footprint` lies entirely within the extent.
    #[must_use]
    pub fn contains_footprint(&self, footprint: &Footprint) -> bool {
        if footprint.is_empty() {
            return false;
        }
        let x = i64::from(footprint.origin.x);
        let y = i64::from(footprint.origin.y);
        x >= 0
            && y >= 0
            && x + i64::from(footprint.size.width) <= i64::from(self.width)
            && y + i64::from(footprint.size.height) <= i64::from(self.height)
    }

    /// State of `cell`. Cells outside the extent are [`SurfaceState::Empty`].
    #[must_use]
    pub fn state(&self, cell: Cell) -> SurfaceState {
        self.index(cell)
            .map_or(SurfaceState::Empty, |index| self.cells[index])
    }

    /// Overwrite the state of a cell while building a map.
    ///
    /// Returns `false` if the cell is out of bounds.
    pub fn set_state(&mut self, cell: Cell, state: SurfaceState) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.cells[index] = state;
                true
            }
            None => false,
        }
    }

    /// Whether a building with this footprint may occupy the grid.
    ///
    /// True iff every covered cell is placeable; terrain kinds may be mixed.
    /// An empty footprint is never accepted.
    #[must_use]
    pub fn can_accept(&self, footprint: &Footprint) -> bool {
        self.contains_footprint(footprint)
            && footprint
                .cells()
                .all(|cell| self.state(cell).is_placeable())
    }

    /// Convert every covered cell from `Placeable(kind)` to `Occupied(kind)`.
    ///
    /// Callers gate this behind a fresh [`can_accept`](Self::can_accept).
    /// All cells are checked before any is written, so a failed commit leaves
    /// the grid untouched.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::OutOfBounds`] if any cell lies outside the extent
    /// - [`PlacementError::InvalidPlacement`] if any cell is not placeable,
    ///   or the footprint is empty
    pub fn commit(&mut self, footprint: &Footprint) -> Result<Vec<CellChange>> {
        if footprint.is_empty() {
            return Err(PlacementError::InvalidPlacement {
                footprint: *footprint,
                cells: vec![footprint.origin],
            });
        }
        if !self.contains_footprint(footprint) {
            return Err(PlacementError::OutOfBounds {
                footprint: *footprint,
                width: self.width,
                height: self.height,
            });
        }

        let blocked: Vec<Cell> = footprint
            .cells()
            .filter(|&cell| !self.state(cell).is_placeable())
            .collect();
        if !blocked.is_empty() {
            return Err(PlacementError::InvalidPlacement {
                footprint: *footprint,
                cells: blocked,
            });
        }

        let mut changes = Vec::with_capacity(footprint.size.cell_count() as usize);
        for cell in footprint.cells() {
            if let Some(index) = self.index(cell) {
                if let SurfaceState::Placeable(kind) = self.cells[index] {
                    let state = SurfaceState::Occupied(kind);
                    self.cells[index] = state;
                    changes.push(CellChange { cell, state });
                }
            }
        }

        Ok(changes)
    }

    /// Iterate all cells with their states, row by row from `y = 0`.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, SurfaceState)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, &state)| {
            let x = (index % width) as i32;
            let y = (index / width) as i32;
            (Cell::new(x, y), state)
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_occupied()).count()
    }

    /// Number of placeable cells.
    #[must_use]
    pub fn placeable_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| state.is_placeable())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRASS: SurfaceState = SurfaceState::Placeable(TerrainKind::Grass);

    #[test]
    fn test_grid_creation() {
        let grid = OccupancyGrid::new(10, 8);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.placeable_count(), 0);
        assert_eq!(grid.state(Cell::new(3, 3)), SurfaceState::Empty);
    }

    #[test]
    fn test_with_terrain_all_placeable() {
        let grid = OccupancyGrid::with_terrain(5, 5, TerrainKind::Sand);
        for (_, state) in grid.iter() {
            assert_eq!(state, SurfaceState::Placeable(TerrainKind::Sand));
        }
        assert_eq!(grid.placeable_count(), 25);
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        let grid = OccupancyGrid::with_terrain(5, 5, TerrainKind::Grass);
        assert_eq!(grid.state(Cell::new(5, 0)), SurfaceState::Empty);
        assert_eq!(grid.state(Cell::new(0, 5)), SurfaceState::Empty);
        assert_eq!(grid.state(Cell::new(-1, 0)), SurfaceState::Empty);
        assert!(!grid.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn test_set_state() {
        let mut grid = OccupancyGrid::new(4, 4);
        assert!(grid.set_state(Cell::new(1, 2), GRASS));
        assert_eq!(grid.state(Cell::new(1, 2)), GRASS);
        assert!(!grid.set_state(Cell::new(4, 4), GRASS));
    }

    #[test]
    fn test_iter_coordinates() {
        let mut grid = OccupancyGrid::new(3, 2);
        grid.set_state(Cell::new(2, 1), GRASS);
        let found: Vec<Cell> = grid
            .iter()
            .filter(|(_, state)| state.is_placeable())
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(found, vec![Cell::new(2, 1)]);
    }

    #[test]
    fn test_can_accept_mixed_kinds() {
        let mut grid = OccupancyGrid::with_terrain(4, 4, TerrainKind::Grass);
        grid.set_state(Cell::new(1, 0), SurfaceState::Placeable(TerrainKind::Stone));
        assert!(grid.can_accept(&Footprint::new(Cell::ORIGIN, 2, 2)));
    }

    #[test]
    fn test_can_accept_rejects_empty_and_occupied() {
        let mut grid = OccupancyGrid::with_terrain(4, 4, TerrainKind::Grass);
        grid.set_state(Cell::new(1, 1), SurfaceState::Empty);
        grid.set_state(Cell::new(3, 3), SurfaceState::Occupied(TerrainKind::Grass));

        assert!(!grid.can_accept(&Footprint::new(Cell::ORIGIN, 2, 2)));
        assert!(!grid.can_accept(&Footprint::new(Cell::new(2, 2), 2, 2)));
        assert!(grid.can_accept(&Footprint::new(Cell::new(2, 0), 2, 2)));
    }

    #[test]
    fn test_can_accept_out_of_bounds() {
        let grid = OccupancyGrid::with_terrain(5, 5, TerrainKind::Grass);
        assert!(!grid.can_accept(&Footprint::new(Cell::new(5, 5), 1, 1)));
        assert!(!grid.can_accept(&Footprint::new(Cell::new(4, 4), 2, 1)));
        assert!(!grid.can_accept(&Footprint::new(Cell::new(-1, 0), 2, 1)));
    }

    #[test]
    fn test_can_accept_empty_footprint() {
        let grid = OccupancyGrid::with_terrain(5, 5, TerrainKind::Grass);
        assert!(!grid.can_accept(&Footprint::new(Cell::ORIGIN, 0, 0)));
    }

    #[test]
    fn test_commit_preserves_kind() {
        let mut grid = OccupancyGrid::with_terrain(4, 4, TerrainKind::Grass);
        grid.set_state(Cell::new(1, 0), SurfaceState::Placeable(TerrainKind::Sand));

        let changes = grid.commit(&Footprint::new(Cell::ORIGIN, 2, 1)).unwrap();

        assert_eq!(changes.len(), 2);
        assert_eq!(
            grid.state(Cell::new(0, 0)),
            SurfaceState::Occupied(TerrainKind::Grass)
        );
        assert_eq!(
            grid.state(Cell::new(1, 0)),
            SurfaceState::Occupied(TerrainKind::Sand)
        );
        assert_eq!(grid.state(Cell::new(2, 0)), GRASS);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_commit_invalid_leaves_grid_untouched() {
        let mut grid = OccupancyGrid::with_terrain(4, 4, TerrainKind::Grass);
        grid.set_state(Cell::new(1, 0), SurfaceState::Occupied(TerrainKind::Grass));
        let before = grid.clone();

        let err = grid.commit(&Footprint::new(Cell::ORIGIN, 2, 1)).unwrap_err();

        match err {
            PlacementError::InvalidPlacement { cells, .. } => {
                assert_eq!(cells, vec![Cell::new(1, 0)]);
            }
            other => panic!("Expected InvalidPlacement, got {other:?}"),
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_commit_out_of_bounds() {
        let mut grid = OccupancyGrid::with_terrain(3, 3, TerrainKind::Grass);
        let before = grid.clone();

        let err = grid.commit(&Footprint::new(Cell::new(2, 2), 2, 2)).unwrap_err();

        assert!(matches!(err, PlacementError::OutOfBounds { width: 3, height: 3, .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_commit_twice_fails() {
        let mut grid = OccupancyGrid::with_terrain(3, 3, TerrainKind::Grass);
        let footprint = Footprint::new(Cell::ORIGIN, 1, 1);
        grid.commit(&footprint).unwrap();
        assert!(grid.commit(&footprint).is_err());
        assert_eq!(grid.occupied_count(), 1);
    }
}

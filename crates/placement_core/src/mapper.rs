//! World-space ↔ grid-cell conversion.

use crate::footprint::Cell;
use crate::math::{floor_to_index, Fixed, Vec2Fixed};

/// Converts between continuous world positions and discrete grid cells.
///
/// The domain is unbounded: every world position maps to some cell. Grid
/// bounds are enforced by the occupancy grid, not the mapper.
pub trait CoordinateMapper {
    /// Cell containing `position`.
    fn world_to_cell(&self, position: Vec2Fixed) -> Cell;

    /// World position of the lower-left corner of `cell`.
    fn cell_to_world(&self, cell: Cell) -> Vec2Fixed;

    /// World position of the centre of `cell`.
    fn cell_center(&self, cell: Cell) -> Vec2Fixed;
}

/// Rectangular grid layout with square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMapper {
    /// Size of each cell in world units.
    cell_size: Fixed,
    /// World position of the corner of cell `(0, 0)`.
    origin: Vec2Fixed,
}

impl GridMapper {
    /// Create a mapper with cell `(0, 0)` cornered at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not positive.
    #[must_use]
    pub fn new(cell_size: Fixed, origin: Vec2Fixed) -> Self {
        assert!(
            cell_size > Fixed::ZERO,
            "GridMapper cell_size must be positive"
        );
        Self { cell_size, origin }
    }

    /// Unit cells cornered at the world origin.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(Fixed::ONE, Vec2Fixed::ZERO)
    }

    /// Cell size in world units.
    #[must_use]
    pub const fn cell_size(&self) -> Fixed {
        self.cell_size
    }

    /// World position of the corner of cell `(0, 0)`.
    #[must_use]
    pub const fn origin(&self) -> Vec2Fixed {
        self.origin
    }

    /// Snap a world position to the corner of its cell.
    #[must_use]
    pub fn snap_to_grid(&self, position: Vec2Fixed) -> Vec2Fixed {
        self.cell_to_world(self.world_to_cell(position))
    }
}

impl Default for GridMapper {
    fn default() -> Self {
        Self::unit()
    }
}

impl CoordinateMapper for GridMapper {
    fn world_to_cell(&self, position: Vec2Fixed) -> Cell {
        let local_x = position.x.saturating_sub(self.origin.x);
        let local_y = position.y.saturating_sub(self.origin.y);
        Cell::new(
            floor_to_index(local_x, self.cell_size),
            floor_to_index(local_y, self.cell_size),
        )
    }

    fn cell_to_world(&self, cell: Cell) -> Vec2Fixed {
        Vec2Fixed::new(
            self.origin
                .x
                .saturating_add(Fixed::from_num(cell.x).saturating_mul(self.cell_size)),
            self.origin
                .y
                .saturating_add(Fixed::from_num(cell.y).saturating_mul(self.cell_size)),
        )
    }

    fn cell_center(&self, cell: Cell) -> Vec2Fixed {
        let corner = self.cell_to_world(cell);
        let half = self.cell_size / 2;
        Vec2Fixed::new(
            corner.x.saturating_add(half),
            corner.y.saturating_add(half),
        )
    }
}

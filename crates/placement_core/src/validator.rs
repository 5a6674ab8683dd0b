//! Placement legality.
//!
//! [`is_legal`] is the single source of truth for whether a footprint may be
//! placed. Preview painting and confirmation both go through it.
//! [`validate_placement`] gives the same verdict with the reason attached.

use serde::{Deserialize, Serialize};

use crate::footprint::{Cell, Footprint};
use crate::occupancy::OccupancyGrid;

/// Result of placement validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementResult {
    /// Placement is valid.
    Valid,
    /// One or more cells are empty ground or already occupied.
    Blocked {
        /// Blocked cells in row-major order.
        cells: Vec<Cell>,
    },
    /// Footprint extends outside the grid.
    OutOfBounds,
    /// Footprint covers no cells.
    EmptyFootprint,
}

impl PlacementResult {
    /// Check if placement is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, PlacementResult::Valid)
    }
}

/// Whether `footprint` may be placed on `grid`.
#[must_use]
pub fn is_legal(footprint: &Footprint, grid: &OccupancyGrid) -> bool {
    grid.can_accept(footprint)
}

/// Check if a footprint can be placed, reporting why not.
///
/// This function validates:
/// - The footprint covers at least one cell
/// - All cells are within grid bounds
/// - All cells are placeable (not empty ground or occupied)
#[must_use]
pub fn validate_placement(footprint: &Footprint, grid: &OccupancyGrid) -> PlacementResult {
    if is_legal(footprint, grid) {
        return PlacementResult::Valid;
    }
    if footprint.is_empty() {
        return PlacementResult::EmptyFootprint;
    }

    if !grid.contains_footprint(footprint) {
        return PlacementResult::OutOfBounds;
    }

    let blocked_cells: Vec<Cell> = footprint
        .cells()
        .filter(|&cell| !grid.state(cell).is_placeable())
        .collect();

    PlacementResult::Blocked {
        cells: blocked_cells,
    }
}

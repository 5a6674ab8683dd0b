//! Test fixtures and helpers.
//!
//! Pre-built grids and controllers for consistent testing.

use fixed::types::I32F32;
use placement_core::controller::PlacementController;
use placement_core::data::MapLayout;
use placement_core::mapper::GridMapper;
use placement_core::math::Vec2Fixed;
use placement_core::occupancy::{OccupancyGrid, TerrainKind};

/// World position from whole numbers.
#[must_use]
pub fn world(x: i32, y: i32) -> Vec2Fixed {
    Vec2Fixed::from_ints(x, y)
}

/// World position at the centre of unit cell `(x, y)`.
#[must_use]
pub fn cell_center(x: i32, y: i32) -> Vec2Fixed {
    Vec2Fixed::new(
        I32F32::from_num(x) + I32F32::from_num(0.5),
        I32F32::from_num(y) + I32F32::from_num(0.5),
    )
}

/// A grid of open grass.
#[must_use]
pub fn grass_grid(width: u32, height: u32) -> OccupancyGrid {
    OccupancyGrid::with_terrain(width, height, TerrainKind::Grass)
}

/// A grid drawn with the ASCII legend, top row first.
///
/// # Panics
///
/// Panics if the rows do not form a valid layout.
#[must_use]
pub fn grid_from_rows(rows: &[&str]) -> OccupancyGrid {
    MapLayout::from_rows(rows)
        .build_grid()
        .expect("fixture rows must form a valid layout")
}

/// An idle controller with unit cells over the given rows.
///
/// # Panics
///
/// Panics if the rows do not form a valid layout.
#[must_use]
pub fn controller_from_rows(rows: &[&str]) -> PlacementController {
    PlacementController::new(GridMapper::unit(), grid_from_rows(rows))
}

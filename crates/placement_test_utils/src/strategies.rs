//! Proptest strategies for placement testing.
//!
//! Grids are small so that random footprints frequently overlap occupied
//! cells and grid edges.

use placement_core::footprint::{Cell, Footprint};
use placement_core::occupancy::{OccupancyGrid, SurfaceState, TerrainKind};
use proptest::prelude::*;

/// Largest grid side generated.
pub const MAX_GRID_SIDE: u32 = 8;

/// Generate a terrain kind.
pub fn arb_terrain() -> impl Strategy<Value = TerrainKind> {
    prop_oneof![
        Just(TerrainKind::Grass),
        Just(TerrainKind::Sand),
        Just(TerrainKind::Stone),
    ]
}

/// Generate a surface state, biased toward placeable ground.
pub fn arb_surface() -> impl Strategy<Value = SurfaceState> {
    prop_oneof![
        1 => Just(SurfaceState::Empty),
        6 => arb_terrain().prop_map(SurfaceState::Placeable),
        2 => arb_terrain().prop_map(SurfaceState::Occupied),
    ]
}

/// Generate a grid between 1x1 and `MAX_GRID_SIDE` square, with random cells.
pub fn arb_grid() -> impl Strategy<Value = OccupancyGrid> {
    (1..=MAX_GRID_SIDE, 1..=MAX_GRID_SIDE).prop_flat_map(|(width, height)| {
        proptest::collection::vec(arb_surface(), (width * height) as usize).prop_map(
            move |states| {
                let mut grid = OccupancyGrid::new(width, height);
                for (index, state) in states.into_iter().enumerate() {
                    let x = (index as u32 % width) as i32;
                    let y = (index as u32 / width) as i32;
                    grid.set_state(Cell::new(x, y), state);
                }
                grid
            },
        )
    })
}

/// Generate a cell around and slightly beyond a `MAX_GRID_SIDE` grid.
pub fn arb_cell() -> impl Strategy<Value = Cell> {
    let side = MAX_GRID_SIDE as i32;
    (-2..side + 2, -2..side + 2).prop_map(|(x, y)| Cell::new(x, y))
}

/// Generate a footprint of 1x1 to 4x4 placed by [`arb_cell`].
pub fn arb_footprint() -> impl Strategy<Value = Footprint> {
    (arb_cell(), 1u32..=4, 1u32..=4)
        .prop_map(|(origin, width, height)| Footprint::new(origin, width, height))
}

/// Generate a sequence of pointer cells for a drag.
pub fn arb_drag_path(max_len: usize) -> impl Strategy<Value = Vec<Cell>> {
    proptest::collection::vec(arb_cell(), 1..max_len)
}

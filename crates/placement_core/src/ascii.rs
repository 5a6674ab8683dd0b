//! ASCII glyphs for surface states and a plain-text grid renderer.
//!
//! | Glyph | State |
//! |-------|-------|
//! | `.` | empty |
//! | `g` `s` `t` | placeable grass / sand / stone |
//! | `G` `S` `T` | occupied grass / sand / stone |
//! | `+` | preview: valid |
//! | `x` | preview: invalid |
//!
//! Rows are written top (highest `y`) to bottom (`y = 0`), matching how a
//! map reads on screen.

use crate::footprint::Cell;
use crate::occupancy::{OccupancyGrid, SurfaceState, TerrainKind};
use crate::preview::{PreviewOverlay, PreviewTint};

/// Glyph for a surface state.
#[must_use]
pub const fn surface_glyph(state: SurfaceState) -> char {
    match state {
        SurfaceState::Empty => '.',
        SurfaceState::Placeable(TerrainKind::Grass) => 'g',
        SurfaceState::Placeable(TerrainKind::Sand) => 's',
        SurfaceState::Placeable(TerrainKind::Stone) => 't',
        SurfaceState::Occupied(TerrainKind::Grass) => 'G',
        SurfaceState::Occupied(TerrainKind::Sand) => 'S',
        SurfaceState::Occupied(TerrainKind::Stone) => 'T',
    }
}

/// Surface state for a glyph, or `None` if the glyph is not in the legend.
#[must_use]
pub const fn parse_glyph(glyph: char) -> Option<SurfaceState> {
    let state = match glyph {
        '.' => SurfaceState::Empty,
        'g' => SurfaceState::Placeable(TerrainKind::Grass),
        's' => SurfaceState::Placeable(TerrainKind::Sand),
        't' => SurfaceState::Placeable(TerrainKind::Stone),
        'G' => SurfaceState::Occupied(TerrainKind::Grass),
        'S' => SurfaceState::Occupied(TerrainKind::Sand),
        'T' => SurfaceState::Occupied(TerrainKind::Stone),
        _ => return None,
    };
    Some(state)
}

/// Render the grid as text, one line per row, highest row first.
///
/// When an overlay is given, highlighted cells inside the grid show the
/// preview glyph instead of the surface.
#[must_use]
pub fn render_ascii(grid: &OccupancyGrid, overlay: Option<&PreviewOverlay>) -> String {
    let width = grid.width() as usize;
    let mut out = String::with_capacity((width + 1) * grid.height() as usize);

    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let cell = Cell::new(x, y);
            let glyph = match overlay.map(|o| o.tint(cell)) {
                Some(PreviewTint::Valid) => '+',
                Some(PreviewTint::Invalid) => 'x',
                Some(PreviewTint::Unset) | None => surface_glyph(grid.state(cell)),
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

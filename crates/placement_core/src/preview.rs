//! Transient preview of a footprint's legality during a drag.
//!
//! The overlay is derived state: it is always recomputed from the occupancy
//! grid and the candidate footprint, and never writes back to the grid.
//! Highlighting is all-or-nothing. A footprint is either tinted valid on
//! every cell or invalid on every cell; partial validity is never shown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::footprint::{Cell, Footprint};
use crate::occupancy::OccupancyGrid;
use crate::validator::is_legal;

/// Highlight state of a preview cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PreviewTint {
    /// No highlight.
    #[default]
    Unset,
    /// Cell is part of a footprint that can be placed.
    Valid,
    /// Cell is part of a footprint that cannot be placed.
    Invalid,
}

/// A change of tint on one cell, consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TintDelta {
    /// The cell whose highlight changed.
    pub cell: Cell,
    /// Its new tint.
    pub tint: PreviewTint,
}

/// Cell highlights for the active drag.
#[derive(Debug, Clone, Default)]
pub struct PreviewOverlay {
    /// Highlighted cells. Cells absent from the map are [`PreviewTint::Unset`].
    tints: BTreeMap<Cell, PreviewTint>,
    /// Tint changes not yet drained by the renderer.
    deltas: Vec<TintDelta>,
    /// Number of block writes (`clear` or `paint` calls) performed.
    writes: u64,
}

impl PreviewOverlay {
    /// Create an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tint of `cell`.
    #[must_use]
    pub fn tint(&self, cell: Cell) -> PreviewTint {
        self.tints.get(&cell).copied().unwrap_or_default()
    }

    /// Whether no cell is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tints.is_empty()
    }

    /// Number of highlighted cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tints.len()
    }

    /// Highlighted cells in ascending `(x, y)` order.
    pub fn highlighted(&self) -> impl Iterator<Item = (Cell, PreviewTint)> + '_ {
        self.tints.iter().map(|(&cell, &tint)| (cell, tint))
    }

    /// Number of block writes performed so far.
    #[must_use]
    pub const fn writes(&self) -> u64 {
        self.writes
    }

    /// Drain tint changes accumulated since the last call.
    pub fn take_deltas(&mut self) -> Vec<TintDelta> {
        std::mem::take(&mut self.deltas)
    }

    /// Reset every cell of `area` to [`PreviewTint::Unset`].
    pub fn clear(&mut self, area: &Footprint) {
        self.writes += 1;
        for cell in area.cells() {
            self.set(cell, PreviewTint::Unset);
        }
    }

    /// Highlight `footprint` against `grid` and return its legality.
    ///
    /// Cells are tinted valid only if every covered cell is placeable; the
    /// first failing cell turns the whole footprint invalid.
    pub fn paint(&mut self, footprint: &Footprint, grid: &OccupancyGrid) -> bool {
        self.writes += 1;
        let valid = is_legal(footprint, grid);
        let tint = if valid {
            PreviewTint::Valid
        } else {
            PreviewTint::Invalid
        };
        for cell in footprint.cells() {
            self.set(cell, tint);
        }
        valid
    }

    fn set(&mut self, cell: Cell, tint: PreviewTint) {
        let previous = match tint {
            PreviewTint::Unset => self.tints.remove(&cell),
            _ => self.tints.insert(cell, tint),
        }
        .unwrap_or_default();

        if previous != tint {
            self.deltas.push(TintDelta { cell, tint });
        }
    }
}

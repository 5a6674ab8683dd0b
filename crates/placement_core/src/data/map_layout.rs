//! Map layouts: grid extent, world mapping and initial terrain.

use serde::{Deserialize, Serialize};

use super::parse_error;
use crate::ascii::parse_glyph;
use crate::error::{PlacementError, Result};
use crate::footprint::Cell;
use crate::mapper::GridMapper;
use crate::math::{fixed_serde, Fixed, Vec2Fixed};
use crate::occupancy::OccupancyGrid;

/// Initial map for a placement session.
///
/// Terrain is drawn with the glyphs from [`crate::ascii`], top row first.
/// The grid extent is the row length by the number of rows.
///
/// # Example RON
///
/// ```ron
/// MapLayout(
///     name: "meadow",
///     cell_size: 1.0,
///     origin: (x: 0.0, y: 0.0),
///     rows: [
///         "ggss",
///         "gG.s",
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayout {
    /// Layout name, for logs.
    #[serde(default)]
    pub name: String,

    /// Size of each cell in world units.
    #[serde(default = "default_cell_size", with = "fixed_serde")]
    pub cell_size: Fixed,

    /// World position of the corner of cell `(0, 0)`.
    #[serde(default)]
    pub origin: Vec2Fixed,

    /// Terrain rows, highest `y` first.
    pub rows: Vec<String>,
}

/// Default cell size of one world unit.
fn default_cell_size() -> Fixed {
    Fixed::ONE
}

impl MapLayout {
    /// Parse a layout from RON. `label` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::DataParseError`] if the RON is malformed.
    pub fn from_ron_str(ron: &str, label: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| parse_error(label, &e))
    }

    /// Build a layout from rows with unit cells at the world origin.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        Self {
            name: String::new(),
            cell_size: default_cell_size(),
            origin: Vec2Fixed::ZERO,
            rows: rows.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    /// Grid width in cells (length of the first row).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.chars().count())
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Check internal consistency of the layout.
    ///
    /// Checks for:
    /// - Positive cell size
    /// - At least one non-empty row
    /// - All rows the same length
    /// - Only legend glyphs
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.cell_size <= Fixed::ZERO {
            errors.push(format!("cell_size must be positive, got {}", self.cell_size));
        }

        if self.height() == 0 || self.width() == 0 {
            errors.push("layout has no cells".to_string());
            return errors;
        }
        if u32::try_from(self.width()).is_err() || u32::try_from(self.height()).is_err() {
            errors.push("layout is too large".to_string());
            return errors;
        }

        let width = self.width();
        for (line, row) in self.rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                errors.push(format!(
                    "row {line} has {len} cells, expected {width}"
                ));
            }
            for (column, glyph) in row.chars().enumerate() {
                if parse_glyph(glyph).is_none() {
                    errors.push(format!(
                        "row {line} column {column}: unknown glyph '{glyph}'"
                    ));
                }
            }
        }

        errors
    }

    /// Build the occupancy grid described by the rows.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidLayout`] if [`validate`](Self::validate)
    /// reports any problem.
    pub fn build_grid(&self) -> Result<OccupancyGrid> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(PlacementError::InvalidLayout(errors.join("; ")));
        }

        let width = self.width() as u32;
        let height = self.height() as u32;
        let mut grid = OccupancyGrid::new(width, height);

        for (line, row) in self.rows.iter().enumerate() {
            let y = (height as usize - 1 - line) as i32;
            for (x, glyph) in row.chars().enumerate() {
                if let Some(state) = parse_glyph(glyph) {
                    grid.set_state(Cell::new(x as i32, y), state);
                }
            }
        }

        Ok(grid)
    }

    /// World mapping for this layout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidLayout`] if the cell size is not
    /// positive.
    pub fn mapper(&self) -> Result<GridMapper> {
        if self.cell_size <= Fixed::ZERO {
            return Err(PlacementError::InvalidLayout(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        Ok(GridMapper::new(self.cell_size, self.origin))
    }
}

//! Error types for the placement core.

use thiserror::Error;

use crate::footprint::{Cell, Footprint};

/// Result type alias using [`PlacementError`].
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Top-level error type for placement operations and data loading.
///
/// An illegal drop is not an error: `confirm` reports it as a rejected
/// outcome. The variants below signal either malformed data or a caller that
/// skipped the legality check or the session lifecycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// Footprint extends partly or fully outside the grid extent.
    #[error("Footprint {footprint} extends outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending footprint.
        footprint: Footprint,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },

    /// Commit attempted on cells that are not placeable.
    #[error("Cannot commit {footprint}: {} cell(s) not placeable", .cells.len())]
    InvalidPlacement {
        /// The offending footprint.
        footprint: Footprint,
        /// Cells that were not placeable. Never empty.
        cells: Vec<Cell>,
    },

    /// A drag operation was invoked while no drag session is active.
    #[error("No active drag session for '{operation}'")]
    NoActiveSession {
        /// Name of the operation that was invoked.
        operation: &'static str,
    },

    /// Building template failed validation.
    #[error("Invalid building template '{id}': {reason}")]
    InvalidTemplate {
        /// Template identifier.
        id: String,
        /// Why the template was rejected.
        reason: String,
    },

    /// Map layout failed validation.
    #[error("Invalid map layout: {0}")]
    InvalidLayout(String),

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path (or label) of the source that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },
}

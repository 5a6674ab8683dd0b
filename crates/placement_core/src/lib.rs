//! # Placement Core
//!
//! Grid placement validation for drag-and-drop building placement.
//!
//! This crate contains **only** placement logic:
//! - No rendering
//! - No input handling
//! - No IO (data is parsed from strings)
//!
//! A [`PlacementController`](controller::PlacementController) owns one
//! authoritative [`OccupancyGrid`](occupancy::OccupancyGrid) and one derived
//! [`PreviewOverlay`](preview::PreviewOverlay). The input layer feeds it
//! drag events; the rendering layer reads back tint deltas and committed
//! cell changes.
//!
//! ## Crate Structure
//!
//! - [`mapper`] - World position ↔ grid cell conversion
//! - [`occupancy`] - Permanent cell occupancy
//! - [`preview`] - Transient legality highlights
//! - [`validator`] - Placement legality
//! - [`controller`] - Drag lifecycle state machine
//! - [`data`] - RON map layouts and building templates
//! - [`math`] - Fixed-point math utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod ascii;
pub mod controller;
pub mod data;
pub mod error;
pub mod footprint;
pub mod mapper;
pub mod math;
pub mod occupancy;
pub mod preview;
pub mod validator;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::controller::{
        ConfirmOutcome, ControllerState, DragSession, MoveOutcome, PlacedBuilding,
        PlacementConfig, PlacementController,
    };
    pub use crate::data::{BuildingTemplate, MapLayout, TemplateCatalog};
    pub use crate::error::{PlacementError, Result};
    pub use crate::footprint::{Cell, Footprint, FootprintSize};
    pub use crate::mapper::{CoordinateMapper, GridMapper};
    pub use crate::math::{Fixed, Vec2Fixed};
    pub use crate::occupancy::{CellChange, OccupancyGrid, SurfaceState, TerrainKind};
    pub use crate::preview::{PreviewOverlay, PreviewTint, TintDelta};
    pub use crate::validator::{is_legal, validate_placement, PlacementResult};
}

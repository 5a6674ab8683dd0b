//! Drag-and-drop placement state machine.
//!
//! The controller owns the occupancy grid and the preview overlay and is the
//! only thing that writes to either. The input layer drives it with
//! [`begin_drag`](PlacementController::begin_drag),
//! [`move_to`](PlacementController::move_to),
//! [`confirm`](PlacementController::confirm) and
//! [`cancel`](PlacementController::cancel), all synchronous and in arrival
//! order.
//!
//! ```text
//!            begin_drag                move_to / rejected confirm
//!   Idle  ───────────────▶ Dragging ◀──────────────┐
//!    ▲                        │  └─────────────────┘
//!    └── confirm (legal) ─────┤
//!    └── cancel ──────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::data::{BuildingTemplate, MapLayout};
use crate::error::{PlacementError, Result};
use crate::footprint::{Cell, Footprint};
use crate::mapper::{CoordinateMapper, GridMapper};
use crate::math::Vec2Fixed;
use crate::occupancy::{CellChange, OccupancyGrid};
use crate::preview::{PreviewOverlay, TintDelta};
use crate::validator::{is_legal, validate_placement, PlacementResult};

// ============================================================================
// Configuration
// ============================================================================

/// Controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// World position where a newly started drag appears.
    #[serde(default)]
    pub spawn_position: Vec2Fixed,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            spawn_position: Vec2Fixed::ZERO,
        }
    }
}

// ============================================================================
// Session and Outcomes
// ============================================================================

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No active drag.
    Idle,
    /// A footprint is being dragged and previewed.
    Dragging,
}

/// One placement attempt, from drag start to confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    template: BuildingTemplate,
    origin: Cell,
    valid: bool,
    confirmed: bool,
}

impl DragSession {
    /// Template being placed.
    #[must_use]
    pub fn template(&self) -> &BuildingTemplate {
        &self.template
    }

    /// Current candidate origin cell.
    #[must_use]
    pub const fn origin(&self) -> Cell {
        self.origin
    }

    /// Footprint at the current origin.
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        self.template.size().at(self.origin)
    }

    /// Legality of the current origin as of the last repaint.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the session ended in a placement.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}

/// Result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The pointer stayed in the same cell; nothing was redrawn.
    Unchanged,
    /// The footprint moved and the preview was repainted.
    Moved {
        /// New origin cell.
        origin: Cell,
        /// Legality at the new origin.
        valid: bool,
    },
}

/// A building committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBuilding {
    /// Template the building was created from.
    pub template_id: String,
    /// Cells it occupies.
    pub footprint: Footprint,
}

/// Result of a confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The footprint was committed; the session is over.
    Placed {
        /// The finished session.
        session: DragSession,
        /// Final state of every committed cell.
        changes: Vec<CellChange>,
    },
    /// The footprint is illegal here; nothing changed and the drag goes on.
    Rejected {
        /// Origin that was rejected.
        origin: Cell,
        /// Why it was rejected.
        reason: PlacementResult,
    },
}

impl ConfirmOutcome {
    /// Whether the building was placed.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Orchestrates the drag lifecycle over one grid and one overlay.
#[derive(Debug, Clone)]
pub struct PlacementController<M = GridMapper> {
    mapper: M,
    grid: OccupancyGrid,
    overlay: PreviewOverlay,
    config: PlacementConfig,
    session: Option<DragSession>,
    placed: Vec<PlacedBuilding>,
}

impl PlacementController<GridMapper> {
    /// Create a controller for a map layout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidLayout`] if the layout is malformed.
    pub fn from_layout(layout: &MapLayout) -> Result<Self> {
        let grid = layout.build_grid()?;
        let mapper = layout.mapper()?;
        tracing::info!(
            layout = %layout.name,
            width = grid.width(),
            height = grid.height(),
            "Placement grid loaded"
        );
        Ok(Self::new(mapper, grid))
    }
}

impl<M: CoordinateMapper> PlacementController<M> {
    /// Create an idle controller.
    #[must_use]
    pub fn new(mapper: M, grid: OccupancyGrid) -> Self {
        Self {
            mapper,
            grid,
            overlay: PreviewOverlay::new(),
            config: PlacementConfig::default(),
            session: None,
            placed: Vec::new(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        if self.session.is_some() {
            ControllerState::Dragging
        } else {
            ControllerState::Idle
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Authoritative occupancy.
    #[must_use]
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Current preview highlights.
    #[must_use]
    pub const fn overlay(&self) -> &PreviewOverlay {
        &self.overlay
    }

    /// Coordinate mapper.
    #[must_use]
    pub const fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Every building placed so far, oldest first.
    #[must_use]
    pub fn placed(&self) -> &[PlacedBuilding] {
        &self.placed
    }

    /// Drain preview tint changes for the renderer.
    pub fn take_preview_deltas(&mut self) -> Vec<TintDelta> {
        self.overlay.take_deltas()
    }

    /// World position for the dragged element: centre of the origin cell.
    #[must_use]
    pub fn ghost_position(&self) -> Option<Vec2Fixed> {
        self.session
            .as_ref()
            .map(|session| self.mapper.cell_center(session.origin))
    }

    /// Start dragging a new building and paint its initial preview.
    ///
    /// The footprint appears at the configured spawn position. Starting a
    /// drag while another is active abandons the old one first.
    ///
    /// Returns the legality of the initial position.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidTemplate`] if the template has an
    /// empty footprint or a blank id. The controller state is unchanged.
    pub fn begin_drag(&mut self, template: BuildingTemplate) -> Result<bool> {
        template.validate()?;

        if let Some(previous) = self.session.take() {
            tracing::debug!(
                template = %previous.template.id,
                origin = %previous.origin,
                "Abandoning drag session"
            );
            self.overlay.clear(&previous.footprint());
        }

        let origin = self.mapper.world_to_cell(self.config.spawn_position);
        let footprint = template.size().at(origin);
        let valid = self.overlay.paint(&footprint, &self.grid);

        tracing::debug!(
            template = %template.id,
            origin = %origin,
            valid,
            "Drag started"
        );

        self.session = Some(DragSession {
            template,
            origin,
            valid,
            confirmed: false,
        });

        Ok(valid)
    }

    /// Track the pointer: move the footprint to the cell under `position`.
    ///
    /// If the cell is unchanged nothing is redrawn. Otherwise the old
    /// preview is cleared before the new one is painted.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::NoActiveSession`] when idle.
    pub fn move_to(&mut self, position: Vec2Fixed) -> Result<MoveOutcome> {
        let cell = self.mapper.world_to_cell(position);
        let session = Self::active(&mut self.session, "move_to")?;

        if session.origin == cell {
            return Ok(MoveOutcome::Unchanged);
        }

        self.overlay.clear(&session.footprint());
        session.origin = cell;
        session.valid = self.overlay.paint(&session.footprint(), &self.grid);

        tracing::debug!(origin = %cell, valid = session.valid, "Preview repainted");

        Ok(MoveOutcome::Moved {
            origin: cell,
            valid: session.valid,
        })
    }

    /// Drop the footprint at its current origin.
    ///
    /// Legality is re-checked against the grid as it is now. A legal drop
    /// commits the footprint, clears the preview and ends the session. An
    /// illegal drop changes nothing and leaves the drag running.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::NoActiveSession`] when idle.
    pub fn confirm(&mut self) -> Result<ConfirmOutcome> {
        let session = Self::active(&mut self.session, "confirm")?;
        let footprint = session.footprint();

        if !is_legal(&footprint, &self.grid) {
            let verdict = validate_placement(&footprint, &self.grid);
            session.valid = false;
            tracing::warn!(
                template = %session.template.id,
                footprint = %footprint,
                reason = ?verdict,
                "Placement rejected"
            );
            return Ok(ConfirmOutcome::Rejected {
                origin: footprint.origin,
                reason: verdict,
            });
        }

        let changes = self.grid.commit(&footprint)?;
        self.overlay.clear(&footprint);

        let mut session = self
            .session
            .take()
            .ok_or_else(|| Self::no_session("confirm"))?;
        session.confirmed = true;

        tracing::info!(
            template = %session.template.id,
            footprint = %footprint,
            "Building placed"
        );

        self.placed.push(PlacedBuilding {
            template_id: session.template.id.clone(),
            footprint,
        });

        Ok(ConfirmOutcome::Placed { session, changes })
    }

    /// Abort the drag: clear the preview and return to idle.
    ///
    /// Returns the abandoned session.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::NoActiveSession`] when idle.
    pub fn cancel(&mut self) -> Result<DragSession> {
        let session = self
            .session
            .take()
            .ok_or_else(|| Self::no_session("cancel"))?;

        self.overlay.clear(&session.footprint());
        tracing::debug!(template = %session.template.id, "Drag cancelled");

        Ok(session)
    }

    fn active<'a>(
        session: &'a mut Option<DragSession>,
        operation: &'static str,
    ) -> Result<&'a mut DragSession> {
        session.as_mut().ok_or_else(|| Self::no_session(operation))
    }

    fn no_session(operation: &'static str) -> PlacementError {
        tracing::warn!(operation, "Drag operation invoked with no active session");
        PlacementError::NoActiveSession { operation }
    }
}

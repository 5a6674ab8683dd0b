//! JSON line output for drag replays.
//!
//! Each replayed step produces one JSON object on its own line:
//!
//! ```text
//! {"type":"ready","layout":"meadow","width":6,"height":4}
//! {"type":"drag_started","step":0,"template":"farm","origin":{"x":0,"y":0},"valid":true,"deltas":[...]}
//! {"type":"moved","step":1,"origin":{"x":3,"y":1},"valid":false,"deltas":[...]}
//! {"type":"rejected","step":2,"origin":{"x":3,"y":1},"reason":{"blocked":{"cells":[...]}}}
//! {"type":"finished","placed":1,"writes":5,"grid":"gg..\n..."}
//! ```

use placement_core::footprint::{Cell, Footprint};
use placement_core::occupancy::CellChange;
use placement_core::preview::TintDelta;
use placement_core::validator::PlacementResult;
use serde::{Deserialize, Serialize};

/// Events emitted by the replay runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The layout is loaded and the controller is idle.
    Ready {
        /// Layout name.
        layout: String,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },

    /// A drag began.
    DragStarted {
        /// Step index in the script.
        step: usize,
        /// Template id.
        template: String,
        /// Initial origin cell.
        origin: Cell,
        /// Legality at the initial origin.
        valid: bool,
        /// Preview tint changes.
        deltas: Vec<TintDelta>,
    },

    /// The footprint moved to a new cell.
    Moved {
        /// Step index in the script.
        step: usize,
        /// New origin cell.
        origin: Cell,
        /// Legality at the new origin.
        valid: bool,
        /// Preview tint changes.
        deltas: Vec<TintDelta>,
    },

    /// The pointer stayed in the same cell.
    Unchanged {
        /// Step index in the script.
        step: usize,
    },

    /// The footprint was committed.
    Placed {
        /// Step index in the script.
        step: usize,
        /// Template id.
        template: String,
        /// Committed footprint.
        footprint: Footprint,
        /// Occupancy changes.
        changes: Vec<CellChange>,
        /// Preview tint changes.
        deltas: Vec<TintDelta>,
    },

    /// A confirm was refused; the drag continues.
    Rejected {
        /// Step index in the script.
        step: usize,
        /// Origin that was refused.
        origin: Cell,
        /// Why.
        reason: PlacementResult,
    },

    /// The drag was aborted.
    Cancelled {
        /// Step index in the script.
        step: usize,
        /// Template id.
        template: String,
        /// Preview tint changes.
        deltas: Vec<TintDelta>,
    },

    /// A step could not be applied.
    Error {
        /// Step index in the script.
        step: usize,
        /// Error description.
        message: String,
    },

    /// Replay finished.
    Finished {
        /// Number of buildings placed.
        placed: usize,
        /// Preview block writes performed.
        writes: u64,
        /// Final grid in the ASCII legend.
        grid: String,
    },
}

impl Event {
    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

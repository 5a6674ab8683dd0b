//! Headless drag replay.

use std::io::Write;

use placement_core::ascii::render_ascii;
use placement_core::controller::{ConfirmOutcome, MoveOutcome, PlacementController};
use placement_core::data::{MapLayout, TemplateCatalog};
use placement_core::math::Vec2Fixed;

use crate::loader::ToolError;
use crate::protocol::Event;
use crate::script::{DragScript, DragStep};

/// Replays a script against a fresh controller.
pub struct ScriptRunner<'a> {
    controller: PlacementController,
    script: &'a DragScript,
    catalog: Option<&'a TemplateCatalog>,
    layout_name: String,
}

impl<'a> ScriptRunner<'a> {
    /// Build the controller for `layout` with the script's configuration.
    pub fn new(
        layout: &MapLayout,
        script: &'a DragScript,
        catalog: Option<&'a TemplateCatalog>,
    ) -> Result<Self, ToolError> {
        let controller = PlacementController::from_layout(layout)?.with_config(script.config);
        Ok(Self {
            controller,
            script,
            catalog,
            layout_name: layout.name.clone(),
        })
    }

    /// Controller being driven.
    #[must_use]
    pub fn controller(&self) -> &PlacementController {
        &self.controller
    }

    /// Run every step and return the events, ending with [`Event::Finished`].
    ///
    /// Steps that fail (unknown template, no active drag) produce an
    /// [`Event::Error`] and the replay carries on.
    pub fn run(&mut self) -> Vec<Event> {
        tracing::info!(
            script = %self.script.name,
            steps = self.script.steps.len(),
            "Replaying drag script"
        );

        let mut events = Vec::with_capacity(self.script.steps.len() + 2);
        events.push(Event::Ready {
            layout: self.layout_name.clone(),
            width: self.controller.grid().width(),
            height: self.controller.grid().height(),
        });

        let script = self.script;
        for (step, action) in script.steps.iter().enumerate() {
            let event = self.apply(step, action);
            if let Event::Error { message, .. } = &event {
                tracing::warn!(step, %message, "Step failed");
            }
            events.push(event);
        }

        events.push(Event::Finished {
            placed: self.controller.placed().len(),
            writes: self.controller.overlay().writes(),
            grid: render_ascii(self.controller.grid(), Some(self.controller.overlay())),
        });

        events
    }

    fn apply(&mut self, step: usize, action: &DragStep) -> Event {
        let error = |message: String| Event::Error { step, message };

        match action {
            DragStep::Begin { template } => {
                let Some(resolved) = self.script.resolve_template(template, self.catalog) else {
                    return error(format!("Unknown template '{template}'"));
                };
                match self.controller.begin_drag(resolved) {
                    Ok(valid) => Event::DragStarted {
                        step,
                        template: template.clone(),
                        origin: self
                            .controller
                            .session()
                            .map(|s| s.origin())
                            .unwrap_or_default(),
                        valid,
                        deltas: self.controller.take_preview_deltas(),
                    },
                    Err(e) => error(e.to_string()),
                }
            }
            DragStep::Move { x, y } => match self.controller.move_to(Vec2Fixed::new(*x, *y)) {
                Ok(MoveOutcome::Unchanged) => Event::Unchanged { step },
                Ok(MoveOutcome::Moved { origin, valid }) => Event::Moved {
                    step,
                    origin,
                    valid,
                    deltas: self.controller.take_preview_deltas(),
                },
                Err(e) => error(e.to_string()),
            },
            DragStep::Confirm => match self.controller.confirm() {
                Ok(ConfirmOutcome::Placed { session, changes }) => Event::Placed {
                    step,
                    template: session.template().id.clone(),
                    footprint: session.footprint(),
                    changes,
                    deltas: self.controller.take_preview_deltas(),
                },
                Ok(ConfirmOutcome::Rejected { origin, reason }) => Event::Rejected {
                    step,
                    origin,
                    reason,
                },
                Err(e) => error(e.to_string()),
            },
            DragStep::Cancel => match self.controller.cancel() {
                Ok(session) => Event::Cancelled {
                    step,
                    template: session.template().id.clone(),
                    deltas: self.controller.take_preview_deltas(),
                },
                Err(e) => error(e.to_string()),
            },
        }
    }
}

/// Write events as JSON lines.
pub fn write_events<W: Write>(events: &[Event], mut out: W) -> Result<(), ToolError> {
    for event in events {
        writeln!(out, "{}", event.to_json_line()?).map_err(ToolError::WriteError)?;
    }
    out.flush().map_err(ToolError::WriteError)
}

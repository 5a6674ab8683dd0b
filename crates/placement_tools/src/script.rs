//! Scripted drag sessions.
//!
//! A script is a list of input events replayed against a layout, for
//! reproducing placement behaviour without a renderer.
//!
//! # Example RON
//!
//! ```ron
//! DragScript(
//!     name: "farm beside the barn",
//!     config: (spawn_position: (x: 0.5, y: 0.5)),
//!     templates: [
//!         (id: "farm", width: 2, height: 1),
//!     ],
//!     steps: [
//!         Begin(template: "farm"),
//!         Move(x: 3.2, y: 1.7),
//!         Confirm,
//!     ],
//! )
//! ```

use placement_core::controller::PlacementConfig;
use placement_core::data::{BuildingTemplate, TemplateCatalog};
use placement_core::math::{fixed_serde, Fixed, Vec2Fixed};
use serde::{Deserialize, Serialize};

/// One input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragStep {
    /// Start dragging the named template.
    Begin {
        /// Template id, looked up in the script then the catalog.
        template: String,
    },
    /// Move the pointer to a world position.
    Move {
        /// World X.
        #[serde(with = "fixed_serde")]
        x: Fixed,
        /// World Y.
        #[serde(with = "fixed_serde")]
        y: Fixed,
    },
    /// Drop the footprint.
    Confirm,
    /// Abort the drag.
    Cancel,
}

impl DragStep {
    /// Move step from whole world units.
    #[must_use]
    pub fn move_to(x: i32, y: i32) -> Self {
        let position = Vec2Fixed::from_ints(x, y);
        Self::Move {
            x: position.x,
            y: position.y,
        }
    }

    /// Begin step for a template id.
    #[must_use]
    pub fn begin(template: impl Into<String>) -> Self {
        Self::Begin {
            template: template.into(),
        }
    }
}

/// A replayable sequence of drag events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragScript {
    /// Script name, for logs.
    #[serde(default)]
    pub name: String,
    /// Controller configuration.
    #[serde(default)]
    pub config: PlacementConfig,
    /// Templates defined inline; these shadow catalog entries of the same id.
    #[serde(default)]
    pub templates: Vec<BuildingTemplate>,
    /// Events in arrival order.
    pub steps: Vec<DragStep>,
}

impl DragScript {
    /// Find a template by id, inline definitions first.
    #[must_use]
    pub fn resolve_template(
        &self,
        id: &str,
        catalog: Option<&TemplateCatalog>,
    ) -> Option<BuildingTemplate> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .or_else(|| catalog.and_then(|c| c.get(id)))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script: DragScript = ron::from_str(
            r#"DragScript(
                name: "demo",
                config: (spawn_position: (x: 0.5, y: 0.5)),
                templates: [(id: "farm", width: 2, height: 1)],
                steps: [
                    Begin(template: "farm"),
                    Move(x: 3.25, y: 1.0),
                    Confirm,
                    Cancel,
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(script.name, "demo");
        assert_eq!(
            script.config.spawn_position,
            Vec2Fixed::from_f32(0.5, 0.5)
        );
        assert_eq!(
            script.steps,
            vec![
                DragStep::begin("farm"),
                DragStep::Move {
                    x: Fixed::from_num(3.25),
                    y: Fixed::ONE,
                },
                DragStep::Confirm,
                DragStep::Cancel,
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let script: DragScript = ron::from_str("DragScript(steps: [])").unwrap();
        assert_eq!(script.config, PlacementConfig::default());
        assert!(script.templates.is_empty());
    }

    #[test]
    fn test_inline_template_shadows_catalog() {
        let script = DragScript {
            templates: vec![BuildingTemplate::new("farm", 3, 1)],
            ..DragScript::default()
        };
        let catalog = TemplateCatalog {
            templates: vec![
                BuildingTemplate::new("farm", 2, 1),
                BuildingTemplate::new("hut", 1, 1),
            ],
        };

        let farm = script.resolve_template("farm", Some(&catalog)).unwrap();
        assert_eq!(farm.width, 3);
        assert!(script.resolve_template("hut", Some(&catalog)).is_some());
        assert!(script.resolve_template("hut", None).is_none());
    }
}

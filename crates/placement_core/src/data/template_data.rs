//! Building templates: the fixed footprint size of each placeable building.

use serde::{Deserialize, Serialize};

use super::parse_error;
use crate::error::{PlacementError, Result};
use crate::footprint::FootprintSize;

/// Data-driven building definition.
///
/// # Example RON
///
/// ```ron
/// BuildingTemplate(
///     id: "farm",
///     name: "Farm",
///     width: 2,
///     height: 1,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingTemplate {
    /// Unique string identifier for this building type.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Footprint width in cells.
    pub width: u32,

    /// Footprint height in cells.
    pub height: u32,
}

impl BuildingTemplate {
    /// Create a template with the id doubling as display name.
    #[must_use]
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            width,
            height,
        }
    }

    /// Footprint size of the building.
    #[must_use]
    pub const fn size(&self) -> FootprintSize {
        FootprintSize::new(self.width, self.height)
    }

    /// Check the template is usable for placement.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::InvalidTemplate`] if the id is blank or the
    /// footprint covers no cells.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PlacementError::InvalidTemplate {
                id: self.id.clone(),
                reason: "id must not be empty".to_string(),
            });
        }
        if self.size().is_empty() {
            return Err(PlacementError::InvalidTemplate {
                id: self.id.clone(),
                reason: format!(
                    "footprint {}x{} covers no cells",
                    self.width, self.height
                ),
            });
        }
        Ok(())
    }
}

/// A set of building templates loaded together.
///
/// # Example RON
///
/// ```ron
/// TemplateCatalog(
///     templates: [
///         (id: "hut", width: 1, height: 1),
///         (id: "farm", name: "Farm", width: 2, height: 1),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    /// All templates, in file order.
    pub templates: Vec<BuildingTemplate>,
}

impl TemplateCatalog {
    /// Parse a catalog from RON. `label` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::DataParseError`] if the RON is malformed.
    pub fn from_ron_str(ron: &str, label: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| parse_error(label, &e))
    }

    /// Find a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BuildingTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Validate every template and check ids are unique.
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (index, template) in self.templates.iter().enumerate() {
            if let Err(e) = template.validate() {
                errors.push(e.to_string());
            }
            if self.templates[..index].iter().any(|t| t.id == template.id) {
                errors.push(format!("Duplicate template id '{}'", template.id));
            }
        }

        errors
    }
}

//! Data validation utilities.

use std::path::Path;

use placement_core::data::{MapLayout, TemplateCatalog};

use crate::loader::{load_catalog, load_layout, ToolError};

/// Summary of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Placeable cells in the layout.
    pub placeable: usize,
    /// Templates checked.
    pub templates: usize,
    /// Templates too large to fit the layout anywhere.
    pub oversized: Vec<String>,
}

/// Validate a layout file and, optionally, a template catalog against it.
///
/// # Errors
///
/// Returns an error if a file cannot be loaded, or [`ToolError::Invalid`]
/// listing every problem found.
pub fn validate_files(
    layout_path: &Path,
    templates_path: Option<&Path>,
) -> Result<ValidationSummary, ToolError> {
    let layout = load_layout(layout_path)?;
    let catalog = templates_path.map(load_catalog).transpose()?;
    validate_data(&layout, catalog.as_ref())
}

/// Validate loaded data.
///
/// # Errors
///
/// Returns [`ToolError::Invalid`] listing every problem found.
pub fn validate_data(
    layout: &MapLayout,
    catalog: Option<&TemplateCatalog>,
) -> Result<ValidationSummary, ToolError> {
    let mut errors: Vec<String> = layout
        .validate()
        .into_iter()
        .map(|e| format!("layout: {e}"))
        .collect();
    if let Some(catalog) = catalog {
        errors.extend(catalog.validate().into_iter().map(|e| format!("templates: {e}")));
    }

    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        return Err(ToolError::Invalid(errors));
    }

    let grid = layout.build_grid()?;
    let templates = catalog.map_or(&[][..], |c| c.templates.as_slice());
    let oversized: Vec<String> = templates
        .iter()
        .filter(|t| t.width > grid.width() || t.height > grid.height())
        .map(|t| t.id.clone())
        .collect();
    for id in &oversized {
        tracing::warn!(template = %id, "Template does not fit the layout");
    }

    Ok(ValidationSummary {
        width: layout.width(),
        height: layout.height(),
        placeable: grid.placeable_count(),
        templates: templates.len(),
        oversized,
    })
}

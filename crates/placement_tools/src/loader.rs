//! File loading for RON data.
//!
//! `placement_core` parses from strings only; this module owns the IO.

use std::path::Path;

use placement_core::data::{MapLayout, TemplateCatalog};
use placement_core::error::PlacementError;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::script::DragScript;

/// Error type for tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse {path}: {source}")]
    ParseError {
        /// File that failed to parse.
        path: String,
        /// Underlying RON error.
        #[source]
        source: ron::error::SpannedError,
    },
    /// Failed to write output.
    #[error("Failed to write output: {0}")]
    WriteError(#[source] std::io::Error),
    /// Failed to encode JSON output.
    #[error("Failed to encode output: {0}")]
    EncodeError(#[from] serde_json::Error),
    /// Placement data was rejected by the core.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// Data loaded but failed validation.
    #[error("{} validation error(s)", .0.len())]
    Invalid(Vec<String>),
}

/// Load and deserialize a RON file.
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, ToolError> {
    if !path.exists() {
        return Err(ToolError::FileNotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    ron::from_str(&contents).map_err(|source| ToolError::ParseError {
        path: path.display().to_string(),
        source,
    })
}

/// Load a map layout.
pub fn load_layout(path: &Path) -> Result<MapLayout, ToolError> {
    let layout: MapLayout = load_ron(path)?;
    tracing::debug!(
        path = %path.display(),
        width = layout.width(),
        height = layout.height(),
        "Loaded layout"
    );
    Ok(layout)
}

/// Load a building template catalog.
pub fn load_catalog(path: &Path) -> Result<TemplateCatalog, ToolError> {
    let catalog: TemplateCatalog = load_ron(path)?;
    tracing::debug!(
        path = %path.display(),
        templates = catalog.templates.len(),
        "Loaded template catalog"
    );
    Ok(catalog)
}

/// Load a drag script.
pub fn load_script(path: &Path) -> Result<DragScript, ToolError> {
    let script: DragScript = load_ron(path)?;
    tracing::debug!(path = %path.display(), steps = script.steps.len(), "Loaded script");
    Ok(script)
}

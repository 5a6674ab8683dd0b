//! Data structures for placement configuration.
//!
//! Map layouts and building templates are plain data, deserialized from RON.
//!
//! **Note:** This module contains no IO - it parses from strings only.
//! File loading is handled by `placement_tools`.

mod map_layout;
mod template_data;

pub use map_layout::MapLayout;
pub use template_data::{BuildingTemplate, TemplateCatalog};

use crate::error::PlacementError;

/// Wrap a RON parse error with the label of its source.
pub(crate) fn parse_error(label: &str, err: &ron::error::SpannedError) -> PlacementError {
    PlacementError::DataParseError {
        path: label.to_string(),
        message: err.to_string(),
    }
}

//! # Placement Tools
//!
//! Command-line tools for working with placement data:
//! - Data validators for map layouts and building templates
//! - ASCII rendering of layouts
//! - Headless replay of scripted drags, reported as JSON lines

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod protocol;
pub mod runner;
pub mod script;
pub mod validate;

pub use loader::ToolError;

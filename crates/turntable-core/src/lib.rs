//! Core types for the Turntable scene viewer.
//!
//! This crate holds what every other crate in the workspace shares:
//!
//! - [`Settings`]: the control targets and constraints, exchanged with the UI
//!   as a flat JSON document
//! - [`validate`]: the per-field merge that sanitizes untrusted settings
//! - [`errors`]: the error taxonomy for loading and selection

pub mod errors;
pub mod settings;
pub mod validate;

pub use errors::{LoadError, ParseError, SelectionError, UnsupportedFileError};
pub use settings::{OrbitLimits, Settings, FIELD_NAMES};
pub use validate::validate;

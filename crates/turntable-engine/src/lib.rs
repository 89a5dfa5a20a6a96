//! Frame-by-frame model transform for the Turntable viewer.
//!
//! The [`TransformEngine`] owns the live [`TransformState`] and moves it
//! toward the targets in [`Settings`](turntable_core::Settings) once per
//! rendered frame.

pub mod engine;

pub use engine::{
    approach, clamp_to, TransformEngine, TransformState, AUTO_ROTATE_RATE, SNAP_EPSILON,
};

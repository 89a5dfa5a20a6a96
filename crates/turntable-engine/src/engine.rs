//! The per-frame transform update.

use glam::{DMat4, DQuat, DVec3, EulerRot};
use log::trace;
use serde::{Deserialize, Serialize};
use turntable_core::Settings;

/// Remaining gap below which a damped value lands exactly on its target.
pub const SNAP_EPSILON: f64 = 1e-9;

/// Fraction of `autoRotateSpeed` applied per second of auto-rotation.
pub const AUTO_ROTATE_RATE: f64 = 0.5;

/// Live rotation and scale of the displayed model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformState {
    /// Rotation around X, in radians.
    pub rotation_x: f64,
    /// Rotation around Y, in radians.
    pub rotation_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl TransformState {
    /// Unrotated at unit scale.
    pub const INITIAL: Self = Self {
        rotation_x: 0.0,
        rotation_y: 0.0,
        scale: 1.0,
    };

    /// Model matrix: uniform scale, then XYZ Euler rotation.
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            DVec3::splat(self.scale),
            DQuat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0),
            DVec3::ZERO,
        )
    }
}

/// Drives a [`TransformState`] toward the targets in [`Settings`].
///
/// The state is only ever changed by [`tick`](Self::tick).
#[derive(Debug, Clone, Default)]
pub struct TransformEngine {
    state: TransformState,
}

impl TransformEngine {
    /// Create an engine at [`TransformState::INITIAL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine starting from `state`.
    pub fn with_state(state: TransformState) -> Self {
        Self { state }
    }

    /// The current state.
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Advance one frame of `elapsed` seconds.
    ///
    /// Auto-rotation is applied first and is exempt from the Y bounds. The
    /// remaining values step toward their targets (damped or snapped) and are
    /// then clamped into their bounds.
    pub fn tick(&mut self, settings: &Settings, elapsed: f64) -> TransformState {
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        let auto_rotate = settings.auto_rotate;
        let mut state = self.state;

        if auto_rotate {
            state.rotation_y += elapsed * settings.auto_rotate_speed * AUTO_ROTATE_RATE;
        }

        let step = |current: f64, target: f64| {
            if settings.enable_damping {
                approach(current, target, settings.damping_factor)
            } else {
                target
            }
        };

        state.rotation_x = step(state.rotation_x, settings.rotation_x);
        state.scale = step(state.scale, settings.scale);
        if !auto_rotate {
            state.rotation_y = step(state.rotation_y, settings.rotation_y);
        }

        state.rotation_x =
            clamp_to(state.rotation_x, settings.min_rotation_x, settings.max_rotation_x);
        state.scale = clamp_to(state.scale, settings.min_scale, settings.max_scale);
        if !auto_rotate {
            state.rotation_y =
                clamp_to(state.rotation_y, settings.min_rotation_y, settings.max_rotation_y);
        }

        trace!("tick {elapsed:.4}s -> {state:?}");
        self.state = state;
        state
    }
}

/// One damped step from `current` toward `target`.
///
/// A factor of zero or less (or NaN) leaves `current` unchanged; one or more
/// snaps to `target`. The step never passes the target, and a gap within
/// [`SNAP_EPSILON`] closes exactly.
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    if factor.is_nan() || factor <= 0.0 {
        return current;
    }
    if factor >= 1.0 {
        return target;
    }

    let gap = target - current;
    if gap.abs() <= SNAP_EPSILON {
        return target;
    }

    let next = current + gap * factor;
    let remaining = target - next;
    if remaining.abs() <= SNAP_EPSILON || remaining.signum() != gap.signum() {
        target
    } else {
        next
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Infinite bounds leave that side open. When `min > max` the result is
/// `max`.
pub fn clamp_to(value: f64, min: f64, max: f64) -> f64 {
    let mut value = value;
    if min != f64::NEG_INFINITY && value < min {
        value = min;
    }
    if max != f64::INFINITY && value > max {
        value = max;
    }
    value
}

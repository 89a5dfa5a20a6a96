//! Control settings: the targets and constraints the transform engine reads
//! every tick.
//!
//! Settings are exchanged with the UI as a flat JSON object with camelCase
//! keys. Unbounded constraints are stored as signed infinity in memory and
//! written as `null` in JSON, since JSON has no infinity literal.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::f64::consts::PI;

use crate::errors::ParseError;
use crate::validate::validate;

/// JSON keys of every recognized settings field, in export order.
pub const FIELD_NAMES: [&str; 19] = [
    "rotationX",
    "rotationY",
    "scale",
    "enableDamping",
    "dampingFactor",
    "autoRotate",
    "autoRotateSpeed",
    "minRotationX",
    "maxRotationX",
    "minRotationY",
    "maxRotationY",
    "minScale",
    "maxScale",
    "minDistance",
    "maxDistance",
    "minPolarAngle",
    "maxPolarAngle",
    "minAzimuthAngle",
    "maxAzimuthAngle",
];

/// Target orientation/scale plus the damping, auto-rotate and range
/// constraints applied while the model is moved toward it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Target rotation about the X axis, in radians.
    pub rotation_x: f64,
    /// Target rotation about the Y axis, in radians.
    pub rotation_y: f64,
    /// Target uniform scale.
    pub scale: f64,
    /// Smooth toward the target instead of snapping.
    pub enable_damping: bool,
    /// Per-tick blend factor in (0, 1].
    pub damping_factor: f64,
    /// Spin continuously about the Y axis.
    pub auto_rotate: bool,
    /// Auto-rotate speed in radians per second; the sign gives the direction.
    pub auto_rotate_speed: f64,

    #[serde(with = "lower_bound")]
    pub min_rotation_x: f64,
    #[serde(with = "upper_bound")]
    pub max_rotation_x: f64,
    #[serde(with = "lower_bound")]
    pub min_rotation_y: f64,
    #[serde(with = "upper_bound")]
    pub max_rotation_y: f64,
    #[serde(with = "lower_bound")]
    pub min_scale: f64,
    #[serde(with = "upper_bound")]
    pub max_scale: f64,

    // Orbit-controller limits, carried for display and export.
    #[serde(with = "lower_bound")]
    pub min_distance: f64,
    #[serde(with = "upper_bound")]
    pub max_distance: f64,
    #[serde(with = "lower_bound")]
    pub min_polar_angle: f64,
    #[serde(with = "upper_bound")]
    pub max_polar_angle: f64,
    #[serde(with = "lower_bound")]
    pub min_azimuth_angle: f64,
    #[serde(with = "upper_bound")]
    pub max_azimuth_angle: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
            enable_damping: true,
            damping_factor: 0.05,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            min_rotation_x: f64::NEG_INFINITY,
            max_rotation_x: f64::INFINITY,
            min_rotation_y: f64::NEG_INFINITY,
            max_rotation_y: f64::INFINITY,
            min_scale: 0.1,
            max_scale: 10.0,
            min_distance: 1.0,
            max_distance: 100.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f64::NEG_INFINITY,
            max_azimuth_angle: f64::INFINITY,
        }
    }
}

impl Settings {
    /// Create the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target rotation.
    pub fn with_rotation(mut self, rotation_x: f64, rotation_y: f64) -> Self {
        self.rotation_x = rotation_x;
        self.rotation_y = rotation_y;
        self
    }

    /// Set the target scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Constrain rotation around X. Use infinities for an open side.
    pub fn with_rotation_x_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_rotation_x = min;
        self.max_rotation_x = max;
        self
    }

    /// Constrain rotation around Y. Use infinities for an open side.
    pub fn with_rotation_y_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_rotation_y = min;
        self.max_rotation_y = max;
        self
    }

    /// Constrain the scale.
    pub fn with_scale_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Enable damping with the given factor, or disable it with `None`.
    pub fn with_damping(mut self, factor: Option<f64>) -> Self {
        match factor {
            Some(factor) => {
                self.enable_damping = true;
                self.damping_factor = factor;
            }
            None => self.enable_damping = false,
        }
        self
    }

    /// Enable auto-rotate at the given speed, or disable it with `None`.
    pub fn with_auto_rotate(mut self, speed: Option<f64>) -> Self {
        match speed {
            Some(speed) => {
                self.auto_rotate = true;
                self.auto_rotate_speed = speed;
            }
            None => self.auto_rotate = false,
        }
        self
    }

    /// Decode a settings document, keeping `fallback` values for any field
    /// that is absent or has the wrong type.
    ///
    /// Fails only when `text` is not JSON or is not a JSON object.
    pub fn import(text: &str, fallback: &Settings) -> Result<Settings, ParseError> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Object(map) => Ok(validate(&map, fallback)),
            other => Err(ParseError::NotAnObject {
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Encode the settings as pretty-printed JSON.
    pub fn export(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The orbit-controller limits, grouped for display.
    pub fn orbit_limits(&self) -> OrbitLimits {
        OrbitLimits {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            min_polar_angle: self.min_polar_angle,
            max_polar_angle: self.max_polar_angle,
            min_azimuth_angle: self.min_azimuth_angle,
            max_azimuth_angle: self.max_azimuth_angle,
        }
    }
}

/// Raw distance, polar and azimuth limits shown next to the live values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitLimits {
    #[serde(with = "lower_bound")]
    pub min_distance: f64,
    #[serde(with = "upper_bound")]
    pub max_distance: f64,
    #[serde(with = "lower_bound")]
    pub min_polar_angle: f64,
    #[serde(with = "upper_bound")]
    pub max_polar_angle: f64,
    #[serde(with = "lower_bound")]
    pub min_azimuth_angle: f64,
    #[serde(with = "upper_bound")]
    pub max_azimuth_angle: f64,
}

/// The JSON name of a value's type, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn serialize_bound<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

/// Lower bounds: `null` means negative infinity.
pub(crate) mod lower_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_bound(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

/// Upper bounds: `null` means positive infinity.
pub(crate) mod upper_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        super::serialize_bound(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

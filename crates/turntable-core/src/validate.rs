//! Field-by-field sanitizing of untrusted settings documents.

use log::debug;
use serde_json::{Map, Value};

use crate::settings::{json_type_name, Settings, FIELD_NAMES};

/// Merge `candidate` over `fallback`, one field at a time.
///
/// A field is taken from `candidate` only when its JSON type matches the
/// declared type (number or boolean). Bound fields also accept `null`,
/// meaning unbounded on that side. Anything else keeps the `fallback`
/// value. Unknown keys are ignored. This never fails.
pub fn validate(candidate: &Map<String, Value>, fallback: &Settings) -> Settings {
    let fields = Fields { candidate };

    for key in candidate.keys() {
        if !FIELD_NAMES.contains(&key.as_str()) {
            debug!("ignoring unknown settings field '{key}'");
        }
    }

    Settings {
        rotation_x: fields.number("rotationX", fallback.rotation_x),
        rotation_y: fields.number("rotationY", fallback.rotation_y),
        scale: fields.number("scale", fallback.scale),
        enable_damping: fields.boolean("enableDamping", fallback.enable_damping),
        damping_factor: fields.number("dampingFactor", fallback.damping_factor),
        auto_rotate: fields.boolean("autoRotate", fallback.auto_rotate),
        auto_rotate_speed: fields.number("autoRotateSpeed", fallback.auto_rotate_speed),
        min_rotation_x: fields.bound("minRotationX", fallback.min_rotation_x, f64::NEG_INFINITY),
        max_rotation_x: fields.bound("maxRotationX", fallback.max_rotation_x, f64::INFINITY),
        min_rotation_y: fields.bound("minRotationY", fallback.min_rotation_y, f64::NEG_INFINITY),
        max_rotation_y: fields.bound("maxRotationY", fallback.max_rotation_y, f64::INFINITY),
        min_scale: fields.bound("minScale", fallback.min_scale, f64::NEG_INFINITY),
        max_scale: fields.bound("maxScale", fallback.max_scale, f64::INFINITY),
        min_distance: fields.bound("minDistance", fallback.min_distance, f64::NEG_INFINITY),
        max_distance: fields.bound("maxDistance", fallback.max_distance, f64::INFINITY),
        min_polar_angle: fields.bound("minPolarAngle", fallback.min_polar_angle, f64::NEG_INFINITY),
        max_polar_angle: fields.bound("maxPolarAngle", fallback.max_polar_angle, f64::INFINITY),
        min_azimuth_angle: fields.bound(
            "minAzimuthAngle",
            fallback.min_azimuth_angle,
            f64::NEG_INFINITY,
        ),
        max_azimuth_angle: fields.bound(
            "maxAzimuthAngle",
            fallback.max_azimuth_angle,
            f64::INFINITY,
        ),
    }
}

/// Typed lookups into a candidate document.
struct Fields<'a> {
    candidate: &'a Map<String, Value>,
}

impl Fields<'_> {
    fn number(&self, key: &str, fallback: f64) -> f64 {
        match self.candidate.get(key) {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) => value,
                None => self.reject(key, "unrepresentable number", fallback),
            },
            Some(other) => self.reject(key, json_type_name(other), fallback),
            None => fallback,
        }
    }

    fn boolean(&self, key: &str, fallback: bool) -> bool {
        match self.candidate.get(key) {
            Some(Value::Bool(value)) => *value,
            Some(other) => self.reject(key, json_type_name(other), fallback),
            None => fallback,
        }
    }

    fn bound(&self, key: &str, fallback: f64, unbounded: f64) -> f64 {
        match self.candidate.get(key) {
            Some(Value::Null) => unbounded,
            _ => self.number(key, fallback),
        }
    }

    fn reject<T: std::fmt::Debug>(&self, key: &str, found: &str, fallback: T) -> T {
        debug!("settings field '{key}' has type {found}; keeping {fallback:?}");
        fallback
    }
}

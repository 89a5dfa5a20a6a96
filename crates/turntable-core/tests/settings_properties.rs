//! Property tests for settings import/export.

use proptest::prelude::*;
use turntable_core::{validate, Settings};

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn lower() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::NEG_INFINITY), finite()]
}

fn upper() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::INFINITY), finite()]
}

prop_compose! {
    fn settings()(
        (rotation_x, rotation_y, scale) in (finite(), finite(), 0.001..100.0f64),
        (enable_damping, damping_factor) in (any::<bool>(), 0.001..=1.0f64),
        (auto_rotate, auto_rotate_speed) in (any::<bool>(), finite()),
        (min_rotation_x, max_rotation_x, min_rotation_y, max_rotation_y) in
            (lower(), upper(), lower(), upper()),
        (min_scale, max_scale) in (lower(), upper()),
        (min_distance, max_distance, min_polar_angle, max_polar_angle) in
            (lower(), upper(), lower(), upper()),
        (min_azimuth_angle, max_azimuth_angle) in (lower(), upper()),
    ) -> Settings {
        Settings {
            rotation_x,
            rotation_y,
            scale,
            enable_damping,
            damping_factor,
            auto_rotate,
            auto_rotate_speed,
            min_rotation_x,
            max_rotation_x,
            min_rotation_y,
            max_rotation_y,
            min_scale,
            max_scale,
            min_distance,
            max_distance,
            min_polar_angle,
            max_polar_angle,
            min_azimuth_angle,
            max_azimuth_angle,
        }
    }
}

proptest! {
    #[test]
    fn export_then_import_reproduces_settings(original in settings(), fallback in settings()) {
        let json = original.export().unwrap();
        let imported = Settings::import(&json, &fallback).unwrap();
        prop_assert_eq!(imported, original);
    }

    #[test]
    fn validate_of_decoded_export_is_identity(original in settings()) {
        let value = serde_json::to_value(original).unwrap();
        let map = value.as_object().unwrap();
        prop_assert_eq!(validate(map, &Settings::default()), original);
    }

    #[test]
    fn non_numeric_values_never_override(fallback in settings(), text in "[a-z]{0,8}") {
        let mut candidate = serde_json::Map::new();
        for key in turntable_core::FIELD_NAMES {
            candidate.insert(key.to_string(), serde_json::Value::String(text.clone()));
        }
        prop_assert_eq!(validate(&candidate, &fallback), fallback);
    }
}
